//! Facet value counting for the filter dropdowns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog_record::CatalogRecord;
use crate::filter_eval::{matches, record_field};
use crate::filter_spec::{FilterKey, FilterSpec};
use crate::reference_data::{level_label, province_name};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub display_string: String,
    pub count: u64,
}

/// Distinct values of `key` among records matching every other constraint
/// in `spec`, most frequent first. Only equality keys have facets.
pub fn facet_values(spec: &FilterSpec, key: FilterKey, records: &[CatalogRecord]) -> Vec<FacetValue> {
    // the facet's own filter must not hide its sibling values
    let spec = spec.without(key);

    let mut counts: HashMap<&str, (u64, &CatalogRecord)> = HashMap::new();
    for record in records.iter().filter(|r| matches(&spec, r)) {
        let Some(value) = record_field(key, record) else {
            return vec![];
        };
        if value.is_empty() {
            continue;
        }
        counts.entry(value).or_insert((0, record)).0 += 1;
    }

    let mut result = counts
        .into_iter()
        .map(|(value, (count, sample))| FacetValue {
            value: value.to_string(),
            display_string: display_string(key, value, sample),
            count,
        })
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.display_string.cmp(&b.display_string)));
    result
}

fn display_string(key: FilterKey, value: &str, sample: &CatalogRecord) -> String {
    let label = match key {
        FilterKey::Level => level_label(value),
        FilterKey::Province => province_name(&sample.country, value),
        _ => None,
    };
    label.unwrap_or(value).to_string()
}
