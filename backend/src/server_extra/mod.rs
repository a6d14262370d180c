//! HTTP routes exposing the catalog to the frontend.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::api::catalog::{get_programs_by_ids, list_programs};
use crate::api::reference::get_reference_tables;
use crate::db_utils::catalog_store::CatalogStore;

pub type SharedCatalog = Arc<CatalogStore>;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub collection: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ByIdsParams {
    #[serde(default)]
    pub ids: String,
}

pub fn router(store: SharedCatalog) -> Router {
    Router::new()
        .route("/api/programs", get(list_programs_route))
        .route("/api/programs/by_ids", get(programs_by_ids_route))
        .route("/api/reference", get(reference_route))
        .with_state(store)
        .layer(axum::middleware::from_fn(|request: Request, next: Next| async move {
            let method = request.method().clone();
            let uri = request.uri().clone();
            let res = next.run(request).await;
            tracing::debug!("{} {} -> {}", method, uri, res.status());
            res
        }))
}

fn into_response<T: serde::Serialize>(route: &str, result: anyhow::Result<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::error!("{}: request failed: {:#?}", route, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn list_programs_route(State(store): State<SharedCatalog>, Query(params): Query<ListParams>) -> Response {
    into_response("list_programs", list_programs(&store, params.collection).await)
}

pub async fn programs_by_ids_route(State(store): State<SharedCatalog>, Query(params): Query<ByIdsParams>) -> Response {
    into_response("programs_by_ids", get_programs_by_ids(&store, params.ids).await)
}

pub async fn reference_route() -> Response {
    into_response("reference", get_reference_tables().await)
}
