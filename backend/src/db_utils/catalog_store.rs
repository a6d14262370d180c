//! In-memory catalog loaded from the seed dataset.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use common::catalog_record::{CatalogRecord, ProgramId};
use common::reference_data::{level_label, provinces_for_country, province_name};

#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<CatalogRecord>,
    by_id: HashMap<ProgramId, usize>,
}

impl CatalogStore {
    pub fn from_records(records: Vec<CatalogRecord>) -> anyhow::Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), index).is_some() {
                anyhow::bail!("duplicate catalog id: {}", record.id);
            }
            warn_on_unknown_codes(record);
        }
        Ok(Self { records, by_id })
    }

    pub async fn load_seed(path: &Path) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog seed {}", path.display()))?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse catalog seed {}", path.display()))?;
        let store = Self::from_records(records)?;
        tracing::info!("Loaded {} catalog records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, or only those of `collection_hint` when given.
    pub fn list(&self, collection_hint: Option<&str>) -> Vec<CatalogRecord> {
        match collection_hint {
            Some(collection) => self.records.iter().filter(|r| r.collection == collection).cloned().collect(),
            None => self.records.clone(),
        }
    }

    /// Records for the ids that exist, in catalog order. Unknown and repeated
    /// ids are skipped.
    pub fn get_by_ids(&self, ids: &[ProgramId]) -> Vec<CatalogRecord> {
        let mut indexes = ids.iter().filter_map(|id| self.by_id.get(id).copied()).collect::<Vec<_>>();
        indexes.sort_unstable();
        indexes.dedup();
        indexes.into_iter().map(|i| self.records[i].clone()).collect()
    }
}

fn warn_on_unknown_codes(record: &CatalogRecord) {
    if !record.level.is_empty() && level_label(&record.level).is_none() {
        tracing::warn!("catalog record {}: unknown education level {:?}", record.id, record.level);
    }
    if !record.province.is_empty()
        && !provinces_for_country(&record.country).is_empty()
        && province_name(&record.country, &record.province).is_none()
    {
        tracing::warn!("catalog record {}: unknown province {:?} for {}", record.id, record.province, record.country);
    }
}
