use common::catalog_record::CatalogRecord;

use crate::db_utils::catalog_store::CatalogStore;

pub async fn list_programs(store: &CatalogStore, collection_hint: Option<String>) -> anyhow::Result<Vec<CatalogRecord>> {
    let collection_hint = collection_hint.filter(|c| !c.trim().is_empty());
    let records = store.list(collection_hint.as_deref());
    tracing::debug!("list_programs: collection={:?} -> {} records", collection_hint, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_hint_lists_everything() {
        let mut school = CatalogRecord::new("s");
        school.collection = "schools".to_string();
        let store = CatalogStore::from_records(vec![CatalogRecord::new("p"), school]).unwrap();
        assert_eq!(list_programs(&store, Some(" ".to_string())).await.unwrap().len(), 2);
        assert_eq!(list_programs(&store, Some("schools".to_string())).await.unwrap().len(), 1);
    }
}
