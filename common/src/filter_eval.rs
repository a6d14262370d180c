//! Evaluation of a `FilterSpec` against catalog records.

use crate::catalog_record::CatalogRecord;
use crate::filter_spec::{FilterKey, FilterSpec, FilterValue};

fn title(record: &CatalogRecord) -> &str {
    &record.title
}

fn institution_name(record: &CatalogRecord) -> &str {
    &record.institution_name
}

/// Text fields the `search` key looks into.
pub const SEARCH_FIELDS: &[fn(&CatalogRecord) -> &str] = &[title, institution_name];

/// Record attribute an equality key compares against.
pub fn record_field(key: FilterKey, record: &CatalogRecord) -> Option<&str> {
    match key {
        FilterKey::Country => Some(record.country.as_str()),
        FilterKey::Province => Some(record.province.as_str()),
        FilterKey::City => Some(record.city.as_str()),
        FilterKey::Level => Some(record.level.as_str()),
        FilterKey::Discipline => Some(record.discipline.as_str()),
        FilterKey::Search | FilterKey::TuitionMax | FilterKey::Scholarships => None,
    }
}

fn constraint_holds(key: FilterKey, value: &FilterValue, record: &CatalogRecord) -> bool {
    match (key, value) {
        (FilterKey::Search, FilterValue::Text(needle)) => {
            let needle = needle.to_lowercase();
            SEARCH_FIELDS.iter().any(|field| field(record).to_lowercase().contains(&needle))
        }
        (FilterKey::TuitionMax, FilterValue::Amount(max)) => match record.known_tuition() {
            Some(tuition) => tuition <= *max,
            None => true,
        },
        (FilterKey::Scholarships, FilterValue::Flag(flag)) => record.scholarship == *flag,
        (key, FilterValue::Text(expected)) => record_field(key, record) == Some(expected.as_str()),
        // a value of the wrong shape for its key cannot be produced by
        // FilterValue::parse_for; treat it as no constraint
        _ => true,
    }
}

pub fn matches(spec: &FilterSpec, record: &CatalogRecord) -> bool {
    spec.iter().all(|(key, value)| constraint_holds(key, value, record))
}

/// Ordered subsequence of `records` satisfying every constraint in `spec`.
pub fn apply<'a>(spec: &FilterSpec, records: &'a [CatalogRecord]) -> Vec<&'a CatalogRecord> {
    if spec.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|record| matches(spec, record)).collect()
}
