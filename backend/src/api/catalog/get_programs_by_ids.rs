//! Batch lookup of catalog records by id.

use common::catalog_record::{CatalogRecord, ProgramId};

use crate::db_utils::catalog_store::CatalogStore;

pub const MAX_IDS_PER_REQUEST: usize = 100;

/// `ids_param` is the comma separated `ids` query value. Ids that do not
/// exist are left out of the answer.
pub async fn get_programs_by_ids(store: &CatalogStore, ids_param: String) -> anyhow::Result<Vec<CatalogRecord>> {
    let ids = ids_param
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ProgramId::from)
        .collect::<Vec<_>>();
    if ids.len() > MAX_IDS_PER_REQUEST {
        anyhow::bail!("too many ids: {} (maximum {})", ids.len(), MAX_IDS_PER_REQUEST);
    }
    let records = store.get_by_ids(&ids);
    if records.len() < ids.len() {
        tracing::debug!("get_programs_by_ids: {} of {} ids resolved", records.len(), ids.len());
    }
    Ok(records)
}
