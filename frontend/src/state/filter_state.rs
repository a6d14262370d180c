//! Listing filters kept in step with the location's query string.

use common::catalog_record::CatalogRecord;
use common::catalog_sort::SortOrder;
use common::facets::{FacetValue, facet_values};
use common::filter_eval::apply;
use common::filter_spec::{FilterKey, FilterSpec};
use common::query_string::QueryParams;

use crate::browser::navigation::Navigation;

pub struct FilterState<N: Navigation> {
    navigation: N,
    spec: FilterSpec,
    sort: SortOrder,
}

impl<N: Navigation> FilterState<N> {
    pub fn load(navigation: N) -> Self {
        let params = QueryParams::parse(&navigation.current_query());
        Self {
            spec: FilterSpec::from_params(&params),
            sort: SortOrder::from_params(&params),
            navigation,
        }
    }

    /// Re-reads the query, e.g. after back/forward navigation.
    pub fn reload(&mut self) {
        let params = QueryParams::parse(&self.navigation.current_query());
        self.spec = FilterSpec::from_params(&params);
        self.sort = SortOrder::from_params(&params);
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Applies a user change through `FilterSpec::narrow`, so changing the
    /// country or province drops the keys below it.
    pub fn set(&mut self, key: FilterKey, value: &str) {
        let spec = self.spec.narrow(key, value);
        if spec != self.spec {
            self.spec = spec;
            self.write();
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        if sort != self.sort {
            self.sort = sort;
            self.write();
        }
    }

    pub fn reset(&mut self) {
        self.spec = FilterSpec::new();
        self.sort = SortOrder::default();
        self.write();
    }

    /// Filtered and sorted view of `records`.
    pub fn visible<'a>(&self, records: &'a [CatalogRecord]) -> Vec<&'a CatalogRecord> {
        let mut visible = apply(&self.spec, records);
        self.sort.sort(&mut visible);
        visible
    }

    pub fn facets(&self, key: FilterKey, records: &[CatalogRecord]) -> Vec<FacetValue> {
        facet_values(&self.spec, key, records)
    }

    fn write(&self) {
        let current = self.navigation.current_query();
        let before = QueryParams::parse(&current);
        let mut params = before.clone();
        self.spec.write_to_params(&mut params);
        self.sort.write_to_params(&mut params);
        if params == before {
            return;
        }
        if let Err(e) = self.navigation.replace_query(&params.to_query_string()) {
            tracing::warn!("failed to write filters to the location: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::navigation::MemoryNavigation;
    use std::cell::Cell;

    fn record(id: &str, country: &str, province: &str, tuition: f64) -> CatalogRecord {
        let mut r = CatalogRecord::new(id);
        r.country = country.to_string();
        r.province = province.to_string();
        r.tuition = Some(tuition);
        r
    }

    /// Counts writes so redundant ones can be detected.
    struct CountingNavigation {
        inner: MemoryNavigation,
        writes: Cell<usize>,
    }

    impl Navigation for CountingNavigation {
        fn current_query(&self) -> String {
            self.inner.current_query()
        }
        fn replace_query(&self, query: &str) -> anyhow::Result<()> {
            self.writes.set(self.writes.get() + 1);
            self.inner.replace_query(query)
        }
        fn link_for(&self, path: &str, query: &str) -> String {
            self.inner.link_for(path, query)
        }
    }

    #[test]
    fn loads_from_query_and_keeps_foreign_keys_on_write() {
        let nav = MemoryNavigation::new("", "view=map&country=Canada&province=ON&ids=a%2Cb&tuitionMax=oops");
        let mut state = FilterState::load(nav.clone());
        assert_eq!(state.spec().text(FilterKey::Province), Some("ON"));
        assert_eq!(state.spec().get(FilterKey::TuitionMax), None);

        state.set(FilterKey::Country, "USA");
        assert_eq!(nav.current_query(), "view=map&country=USA&ids=a%2Cb");
    }

    #[test]
    fn repeated_foreign_keys_survive_filter_writes() {
        let nav = MemoryNavigation::new("", "tag=a&tag=b&country=Canada");
        let mut state = FilterState::load(nav.clone());
        state.set(FilterKey::Level, "master");
        assert_eq!(nav.current_query(), "tag=a&tag=b&country=Canada&level=master");
    }

    #[test]
    fn visible_filters_then_sorts() {
        let records = vec![
            record("1", "Canada", "ON", 20000.0),
            record("2", "USA", "", 15000.0),
            record("3", "Canada", "BC", 9000.0),
        ];
        let nav = MemoryNavigation::new("", "country=Canada&sort=tuition_asc");
        let state = FilterState::load(nav);
        let ids = state.visible(&records).iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["3", "1"]);

        let provinces = state.facets(FilterKey::Province, &records);
        assert_eq!(provinces.len(), 2);
    }

    #[test]
    fn unchanged_values_do_not_touch_navigation() {
        let nav = CountingNavigation { inner: MemoryNavigation::new("", "country=Canada"), writes: Cell::new(0) };
        let mut state = FilterState::load(nav);
        state.set(FilterKey::Country, "Canada");
        state.set_sort(SortOrder::Catalog);
        assert_eq!(state.navigation().writes.get(), 0);
        state.set(FilterKey::Level, "master");
        assert_eq!(state.navigation().writes.get(), 1);
        assert_eq!(state.navigation().current_query(), "country=Canada&level=master");
    }

    #[test]
    fn reset_clears_filters_and_sort_only() {
        let nav = MemoryNavigation::new("", "view=list&search=law&sort=title");
        let mut state = FilterState::load(nav.clone());
        state.reset();
        assert!(state.spec().is_empty());
        assert_eq!(state.sort(), SortOrder::Catalog);
        assert_eq!(nav.current_query(), "view=list");
    }

    #[test]
    fn reload_picks_up_external_changes() {
        let nav = MemoryNavigation::new("", "");
        let mut state = FilterState::load(nav.clone());
        nav.replace_query("city=Toronto").unwrap();
        state.reload();
        assert_eq!(state.spec().text(FilterKey::City), Some("Toronto"));
    }
}
