use axum::http::StatusCode;
use library_catalog::repository::MemoryStore;

use crate::common::{app, get};

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let store = MemoryStore::new();
    let response = get(app(&store), "/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog"));
}

#[tokio::test]
async fn test_home_page_shows_counts() {
    let store = MemoryStore::new();
    store.seed_sample_catalog();

    let response = get(app(&store), "/catalog").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Local Library Home"));
    assert!(response.body.contains("Copies available: </strong>2"));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let store = MemoryStore::new();

    let health = get(app(&store), "/health").await;
    assert_eq!(health.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&health.body).unwrap();
    assert_eq!(body["status"], "healthy");

    let ready = get(app(&store), "/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&ready.body).unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_books_and_authors_pages() {
    let store = MemoryStore::new();
    store.seed_sample_catalog();

    let books = get(app(&store), "/catalog/books").await;
    assert_eq!(books.status, StatusCode::OK);
    assert!(books.body.contains("The Name of the Wind"));
    assert!(books.body.contains("Rothfuss, Patrick"));

    let authors = get(app(&store), "/catalog/authors").await;
    assert_eq!(authors.status, StatusCode::OK);
    assert!(authors.body.contains("Asimov, Isaac"));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let store = MemoryStore::new();
    for uri in [
        "/catalog/book/not-an-id",
        "/catalog/author/00000000-0000-4000-8000-000000000000",
        "/catalog/genre/00000000-0000-4000-8000-000000000000",
        "/catalog/bookinstance/12",
    ] {
        let response = get(app(&store), uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
    }
}
