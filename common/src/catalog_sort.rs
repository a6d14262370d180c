//! Listing sort order, carried in the `sort` query key.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog_record::CatalogRecord;
use crate::query_string::QueryParams;

pub const SORT_KEY: &str = "sort";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Catalog order, as returned by the catalog service.
    #[default]
    Catalog,
    TuitionAsc,
    TuitionDesc,
    Title,
}

impl SortOrder {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            SortOrder::Catalog => None,
            SortOrder::TuitionAsc => Some("tuition_asc"),
            SortOrder::TuitionDesc => Some("tuition_desc"),
            SortOrder::Title => Some("title"),
        }
    }

    /// Unknown values fall back to catalog order.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "tuition_asc" => SortOrder::TuitionAsc,
            "tuition_desc" => SortOrder::TuitionDesc,
            "title" => SortOrder::Title,
            _ => SortOrder::Catalog,
        }
    }

    pub fn from_params(params: &QueryParams) -> Self {
        params.get(SORT_KEY).map(SortOrder::parse).unwrap_or_default()
    }

    pub fn write_to_params(&self, params: &mut QueryParams) {
        match self.as_str() {
            Some(value) => params.set(SORT_KEY, value),
            None => {
                params.remove(SORT_KEY);
            }
        }
    }

    /// Stable sort; records without a known tuition go last for both
    /// tuition orders.
    pub fn sort(&self, records: &mut [&CatalogRecord]) {
        match self {
            SortOrder::Catalog => {}
            SortOrder::TuitionAsc => records.sort_by(|a, b| by_tuition(a, b, false)),
            SortOrder::TuitionDesc => records.sort_by(|a, b| by_tuition(a, b, true)),
            SortOrder::Title => records.sort_by_key(|r| r.title.to_lowercase()),
        }
    }
}

fn by_tuition(a: &CatalogRecord, b: &CatalogRecord, descending: bool) -> Ordering {
    match (a.known_tuition(), b.known_tuition()) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, tuition: Option<f64>) -> CatalogRecord {
        let mut r = CatalogRecord::new(id);
        r.title = title.to_string();
        r.tuition = tuition;
        r
    }

    #[test]
    fn tuition_orders_put_unknown_last() {
        let records = vec![
            record("a", "Zoology", None),
            record("b", "Art", Some(9000.0)),
            record("c", "law", Some(2000.0)),
        ];
        let mut refs = records.iter().collect::<Vec<_>>();
        SortOrder::TuitionAsc.sort(&mut refs);
        assert_eq!(refs.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["c", "b", "a"]);
        SortOrder::TuitionDesc.sort(&mut refs);
        assert_eq!(refs.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b", "c", "a"]);
        SortOrder::Title.sort(&mut refs);
        assert_eq!(refs.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn params_round_trip_and_default() {
        let mut params = QueryParams::parse("view=grid");
        assert_eq!(SortOrder::from_params(&params), SortOrder::Catalog);
        SortOrder::TuitionDesc.write_to_params(&mut params);
        assert_eq!(params.to_query_string(), "view=grid&sort=tuition_desc");
        assert_eq!(SortOrder::from_params(&params), SortOrder::TuitionDesc);
        SortOrder::Catalog.write_to_params(&mut params);
        assert_eq!(params.to_query_string(), "view=grid");
        assert_eq!(SortOrder::parse("cheapest"), SortOrder::Catalog);
    }
}
