use axum::http::StatusCode;
use uuid::Uuid;

use library_catalog::{
    models::{Author, Book, Genre},
    repository::{GenreRepository, MemoryStore},
};

use crate::common::{app, get, post_form, post_raw};

#[tokio::test]
async fn test_create_genre_twice_keeps_one() {
    let store = MemoryStore::new();

    let first = post_form(app(&store), "/catalog/genre/create", "name=Fantasy").await;
    assert_eq!(first.status, StatusCode::SEE_OTHER);
    let location = first.location.unwrap();
    assert!(location.starts_with("/catalog/genre/"));

    let second = post_form(app(&store), "/catalog/genre/create", "name=Fantasy").await;
    assert_eq!(second.location.as_deref(), Some(location.as_str()));
    assert_eq!(GenreRepository::count(&store).await.unwrap(), 1);

    let detail = get(app(&store), &location).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Fantasy"));
}

#[tokio::test]
async fn test_create_genre_without_name_shows_error() {
    let store = MemoryStore::new();

    let response = post_form(app(&store), "/catalog/genre/create", "name=").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Genre name required"));
    assert_eq!(GenreRepository::count(&store).await.unwrap(), 0);
}

#[tokio::test]
async fn test_genre_name_is_escaped_once() {
    let store = MemoryStore::new();

    let created = post_form(
        app(&store),
        "/catalog/genre/create",
        "name=%3Cb%3ESpy%3C%2Fb%3E",
    )
    .await;
    let stored = GenreRepository::list(&store).await.unwrap();
    assert_eq!(stored[0].name, "&lt;b&gt;Spy&lt;&#x2F;b&gt;");

    let detail = get(app(&store), &created.location.unwrap()).await;
    assert!(detail.body.contains("&lt;b&gt;Spy"));
    assert!(!detail.body.contains("<b>Spy"));
    assert!(!detail.body.contains("&amp;lt;"));
}

#[tokio::test]
async fn test_update_genre() {
    let store = MemoryStore::new();
    let genre = Genre {
        id: Uuid::new_v4(),
        name: "Sci-fi".to_string(),
    };
    store.insert_genre(genre.clone());
    let update_uri = format!("{}/update", genre.url());

    let form = get(app(&store), &update_uri).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"Sci-fi\""));

    let response = post_form(app(&store), &update_uri, "name=Science+Fiction").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(genre.url()));
    let stored = GenreRepository::find_by_id(&store, genre.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Science Fiction");
}

#[tokio::test]
async fn test_delete_genre_flow() {
    let store = MemoryStore::new();
    let used = Genre {
        id: Uuid::new_v4(),
        name: "Fantasy".to_string(),
    };
    let unused = Genre {
        id: Uuid::new_v4(),
        name: "Horror".to_string(),
    };
    let author = Author {
        id: Uuid::new_v4(),
        first_name: "Patrick".to_string(),
        family_name: "Rothfuss".to_string(),
        date_of_birth: None,
        date_of_death: None,
    };
    store.insert_genre(used.clone());
    store.insert_genre(unused.clone());
    store.insert_author(author.clone());
    store.insert_book(Book {
        id: Uuid::new_v4(),
        title: "The Name of the Wind".to_string(),
        author_id: author.id,
        summary: "Kvothe".to_string(),
        isbn: "9781473211896".to_string(),
        genre_ids: vec![used.id],
    });

    let confirm = get(app(&store), &format!("{}/delete", used.url())).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("The Name of the Wind"));

    let blocked = post_form(
        app(&store),
        "/catalog/genre/delete",
        &format!("genreid={}", used.id),
    )
    .await;
    assert_eq!(blocked.status, StatusCode::OK);
    assert!(blocked.body.contains("The Name of the Wind"));
    assert!(GenreRepository::find_by_id(&store, used.id).await.unwrap().is_some());

    let deleted = post_form(
        app(&store),
        "/catalog/genre/delete",
        &format!("genreid={}", unused.id),
    )
    .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/genres"));
    assert!(GenreRepository::find_by_id(&store, unused.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_without_id_is_not_found() {
    let store = MemoryStore::new();
    let response = post_form(app(&store), "/catalog/genre/delete", "").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreadable_form_renders_error_page() {
    let store = MemoryStore::new();

    let response = post_raw(
        app(&store),
        "/catalog/genre/create",
        "text/plain",
        "name=Fantasy",
    )
    .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(response.body.contains("Unsupported Media Type"));
    assert_eq!(GenreRepository::count(&store).await.unwrap(), 0);
}
