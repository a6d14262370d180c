//! Client side of the catalog service.

use std::collections::HashMap;

use common::catalog_record::{CatalogRecord, ProgramId};
use serde::de::DeserializeOwned;

/// Source of catalog records. `get_by_ids` answers in any order and leaves
/// out ids that do not exist.
#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn list(&self, collection_hint: Option<&str>) -> anyhow::Result<Vec<CatalogRecord>>;
    async fn get_by_ids(&self, ids: &[ProgramId]) -> anyhow::Result<Vec<CatalogRecord>>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client: reqwest::Client::new() }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(serde_json::from_str(&response_txt)?)
    }
}

impl CatalogService for HttpCatalogClient {
    async fn list(&self, collection_hint: Option<&str>) -> anyhow::Result<Vec<CatalogRecord>> {
        match collection_hint {
            Some(collection) => self.get_json("/api/programs", &[("collection", collection)]).await,
            None => self.get_json("/api/programs", &[]).await,
        }
    }

    async fn get_by_ids(&self, ids: &[ProgramId]) -> anyhow::Result<Vec<CatalogRecord>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let joined = ids.iter().map(ProgramId::as_str).collect::<Vec<_>>().join(",");
        self.get_json("/api/programs/by_ids", &[("ids", joined.as_str())]).await
    }
}

/// Fetches `ids` in one batch and returns the records in the order of
/// `ids`. Ids the catalog no longer knows are left out, repeated ids appear
/// once.
pub async fn resolve_records<C: CatalogService>(catalog: &C, ids: &[ProgramId]) -> anyhow::Result<Vec<CatalogRecord>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let fetched = catalog.get_by_ids(ids).await?;
    let mut by_id = fetched.into_iter().map(|r| (r.id.clone(), r)).collect::<HashMap<_, _>>();
    let records = ids.iter().filter_map(|id| by_id.remove(id)).collect::<Vec<_>>();
    if records.len() < ids.len() {
        tracing::debug!("resolve_records: {} of {} ids resolved", records.len(), ids.len());
    }
    Ok(records)
}

/// Requested ids that have no record in `resolved`.
pub fn missing_ids(requested: &[ProgramId], resolved: &[CatalogRecord]) -> Vec<ProgramId> {
    requested
        .iter()
        .filter(|id| !resolved.iter().any(|r| &r.id == *id))
        .cloned()
        .collect()
}
