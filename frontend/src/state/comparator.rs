//! Program comparison list, mirrored to local storage and to a shareable link.
//!
//! Hydration order on startup is the `ids` query key (so shared and
//! bookmarked links win), then the persisted store, then empty. Every
//! mutation re-persists, rewrites `ids` in the current query and recomputes
//! the link before returning. Storage and navigation failures are logged and
//! otherwise ignored: the in-memory selection stays authoritative.

use common::catalog_record::{CatalogRecord, ProgramId};
use common::query_string::QueryParams;
use common::selection::{CapacityError, IDS_KEY, SelectionSet};

use crate::api::catalog_api::{CatalogService, resolve_records};
use crate::browser::navigation::Navigation;
use crate::browser::storage::LocalStore;
use crate::config::FrontendConfig;
use crate::data_definitions::persisted_selection::PersistedSelection;

/// Where the selection came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    Query,
    Store,
    Empty,
}

pub struct Comparator<S: LocalStore, N: Navigation> {
    selection: SelectionSet,
    store: S,
    navigation: N,
    store_key: String,
    compare_path: String,
    share_link: String,
    source: HydrationSource,
}

impl<S: LocalStore, N: Navigation> Comparator<S, N> {
    pub fn initialize(store: S, navigation: N, config: &FrontendConfig) -> Self {
        let capacity = config.max_compare;
        let params = QueryParams::parse(&navigation.current_query());
        let from_query = params
            .get(IDS_KEY)
            .map(|raw| SelectionSet::from_ids_param(raw, capacity))
            .filter(|(set, _)| !set.is_empty());

        let mut needs_persist = false;
        let (selection, source) = match from_query {
            Some((set, discarded)) => {
                if discarded > 0 {
                    tracing::warn!("comparison link has {} ids over the limit of {}, ignoring them", discarded, capacity);
                }
                needs_persist = true;
                (set, HydrationSource::Query)
            }
            None => match load_persisted(&store, &config.selection_store_key, capacity) {
                Some((set, cleaned)) if !set.is_empty() => {
                    needs_persist = cleaned;
                    (set, HydrationSource::Store)
                }
                _ => (SelectionSet::with_capacity(capacity), HydrationSource::Empty),
            },
        };

        let mut comparator = Self {
            selection,
            store,
            navigation,
            store_key: config.selection_store_key.clone(),
            compare_path: config.compare_path.clone(),
            share_link: String::new(),
            source,
        };
        // a shared link replaces whatever this browser had saved, and a saved
        // list that needed cleaning is written back as loaded
        if needs_persist {
            comparator.persist();
        }
        comparator.share_link = comparator.compute_link();
        tracing::debug!("comparator initialized from {:?} with {} items", source, comparator.selection.len());
        comparator
    }

    /// Appends `id`. Already-present ids succeed without change; a full list
    /// is rejected and left as it was.
    pub fn add(&mut self, id: impl Into<ProgramId>) -> Result<(), CapacityError> {
        if self.selection.add(id.into())? {
            self.sync();
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &ProgramId) {
        if self.selection.remove(id) {
            self.sync();
        }
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.sync();
    }

    pub fn contains(&self, id: &ProgramId) -> bool {
        self.selection.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.selection.is_full()
    }

    pub fn items(&self) -> &[ProgramId] {
        self.selection.items()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn hydration_source(&self) -> HydrationSource {
        self.source
    }

    /// Link that reopens the comparison page with the current items.
    pub fn shareable_link(&self) -> &str {
        &self.share_link
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Snapshot of the items for a resolve that may finish after the
    /// selection has changed again.
    pub fn resolve_ticket(&self) -> ResolveTicket {
        ResolveTicket { ids: self.selection.items().to_vec() }
    }

    /// Batch-fetches full records for `ids` in input order; ids that no
    /// longer resolve are dropped.
    pub async fn resolve_records<C: CatalogService>(catalog: &C, ids: &[ProgramId]) -> anyhow::Result<Vec<CatalogRecord>> {
        resolve_records(catalog, ids).await
    }

    /// Hands back the outcome's records if it was issued for the current
    /// selection, `None` if the selection has moved on since.
    pub fn accept(&self, outcome: ResolveOutcome) -> Option<anyhow::Result<Vec<CatalogRecord>>> {
        if outcome.ticket.ids != self.selection.items() {
            tracing::debug!("discarding stale comparison resolve for {:?}", outcome.ticket.ids);
            return None;
        }
        Some(outcome.records)
    }

    fn sync(&mut self) {
        self.persist();
        self.write_navigation();
        self.share_link = self.compute_link();
    }

    fn persist(&self) {
        let result = if self.selection.is_empty() {
            self.store.remove(&self.store_key)
        } else {
            self.store.set(&self.store_key, &PersistedSelection::new(self.selection.items()).encode())
        };
        if let Err(e) = result {
            tracing::warn!("failed to persist comparison list, keeping it in memory only: {:#}", e);
        }
    }

    fn write_navigation(&self) {
        let current = self.navigation.current_query();
        let mut params = QueryParams::parse(&current);
        if self.selection.is_empty() {
            params.remove(IDS_KEY);
        } else {
            params.set(IDS_KEY, self.selection.to_ids_param());
        }
        let query = params.to_query_string();
        if query == QueryParams::parse(&current).to_query_string() {
            return;
        }
        if let Err(e) = self.navigation.replace_query(&query) {
            tracing::warn!("failed to update the location with the comparison list: {:#}", e);
        }
    }

    fn compute_link(&self) -> String {
        let mut params = QueryParams::new();
        if !self.selection.is_empty() {
            params.set(IDS_KEY, self.selection.to_ids_param());
        }
        self.navigation.link_for(&self.compare_path, &params.to_query_string())
    }
}

/// Saved selection, plus whether hydration had to drop blank, repeated or
/// over-capacity ids from it.
fn load_persisted<S: LocalStore>(store: &S, key: &str, capacity: usize) -> Option<(SelectionSet, bool)> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("failed to read saved comparison list: {:#}", e);
            return None;
        }
    };
    let persisted = match PersistedSelection::decode(&raw) {
        Ok(persisted) => persisted,
        Err(e) => {
            tracing::warn!("saved comparison list is unreadable, starting empty: {}", e);
            return None;
        }
    };
    let (set, discarded) = SelectionSet::from_untrusted(persisted.items.iter().map(ProgramId::as_str), capacity);
    if discarded > 0 {
        tracing::warn!("saved comparison list had {} ids over the limit of {}", discarded, capacity);
    }
    let cleaned = set.items() != persisted.items.as_slice();
    Some((set, cleaned))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveTicket {
    ids: Vec<ProgramId>,
}

impl ResolveTicket {
    pub fn ids(&self) -> &[ProgramId] {
        &self.ids
    }

    pub async fn run<C: CatalogService>(self, catalog: &C) -> ResolveOutcome {
        let records = resolve_records(catalog, &self.ids).await;
        ResolveOutcome { ticket: self, records }
    }
}

#[derive(Debug)]
pub struct ResolveOutcome {
    pub ticket: ResolveTicket,
    pub records: anyhow::Result<Vec<CatalogRecord>>,
}
