//! Frontend catalog client and comparator against the real catalog routes.

use std::sync::Arc;

use backend::{db_utils::catalog_store::CatalogStore, server_extra};
use common::catalog_record::{CatalogRecord, ProgramId};
use frontend::api::catalog_api::{CatalogService, HttpCatalogClient};
use frontend::browser::{navigation::MemoryNavigation, storage::MemoryStore};
use frontend::config::FrontendConfig;
use frontend::state::comparator::Comparator;

fn record(id: &str, collection: &str, title: &str) -> CatalogRecord {
    let mut r = CatalogRecord::new(id);
    r.collection = collection.to_string();
    r.title = title.to_string();
    r
}

async fn spawn_catalog() -> String {
    let store = CatalogStore::from_records(vec![
        record("p-1", "programs", "Nursing"),
        record("p-2", "programs", "Data Science"),
        record("p-3", "programs", "Culinary Arts"),
        record("s-1", "schools", "Lakeside College"),
    ])
    .unwrap();
    let app = server_extra::router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn lists_with_and_without_collection_hint() {
    let client = HttpCatalogClient::new(spawn_catalog().await);
    assert_eq!(client.list(None).await.unwrap().len(), 4);
    let schools = client.list(Some("schools")).await.unwrap();
    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].title, "Lakeside College");
}

#[tokio::test]
async fn comparison_resolves_in_selection_order() {
    let client = HttpCatalogClient::new(spawn_catalog().await);
    let mut comparator = Comparator::initialize(
        MemoryStore::new(),
        MemoryNavigation::new("https://study.example", ""),
        &FrontendConfig::default(),
    );
    for id in ["p-3", "gone", "p-1"] {
        comparator.add(id).unwrap();
    }

    let outcome = comparator.resolve_ticket().run(&client).await;
    let records = comparator.accept(outcome).unwrap().unwrap();
    let ids = records.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids, vec![ProgramId::from("p-3"), ProgramId::from("p-1")]);
}

#[tokio::test]
async fn server_errors_surface_as_errors() {
    let client = HttpCatalogClient::new(spawn_catalog().await);
    let ids = (0..200).map(|i| ProgramId::from(format!("x{}", i))).collect::<Vec<_>>();
    let err = client.get_by_ids(&ids).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}
