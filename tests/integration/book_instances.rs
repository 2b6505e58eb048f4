use axum::http::StatusCode;
use uuid::Uuid;

use library_catalog::{
    models::{Author, Book, BookInstance, BookInstanceStatus},
    repository::{BookInstanceRepository, MemoryStore},
};

use crate::common::{app, get, post_form};

fn catalog_with_copy() -> (MemoryStore, Book, BookInstance) {
    let store = MemoryStore::new();
    let author = Author {
        id: Uuid::new_v4(),
        first_name: "Isaac".to_string(),
        family_name: "Asimov".to_string(),
        date_of_birth: None,
        date_of_death: None,
    };
    let book = Book {
        id: Uuid::new_v4(),
        title: "Foundation".to_string(),
        author_id: author.id,
        summary: "Psychohistory".to_string(),
        isbn: "9780553293357".to_string(),
        genre_ids: vec![],
    };
    let copy = BookInstance {
        id: Uuid::new_v4(),
        book_id: book.id,
        imprint: "Gnome Press, 1951".to_string(),
        status: BookInstanceStatus::Maintenance,
        due_back: None,
    };
    store.insert_author(author);
    store.insert_book(book.clone());
    store.insert_book_instance(copy.clone());
    (store, book, copy)
}

#[tokio::test]
async fn test_list_and_detail() {
    let (store, _, copy) = catalog_with_copy();

    let list = get(app(&store), "/catalog/bookinstances").await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains("Foundation"));
    assert!(list.body.contains("Maintenance"));

    let detail = get(app(&store), &copy.url()).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Copy: Foundation"));
}

#[tokio::test]
async fn test_update_status_is_visible_on_next_lookup() {
    let (store, book, copy) = catalog_with_copy();
    let update_uri = format!("{}/update", copy.url());

    let form = get(app(&store), &update_uri).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("Update Book Instance"));

    let response = post_form(
        app(&store),
        &update_uri,
        &format!(
            "book={}&imprint=Gnome+Press%2C+1951&status=Available&due_back=",
            book.id
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(copy.url()));

    let stored = BookInstanceRepository::find_by_id(&store, copy.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.instance.status, BookInstanceStatus::Available);
}

#[tokio::test]
async fn test_update_with_empty_imprint_changes_nothing() {
    let (store, book, copy) = catalog_with_copy();

    let response = post_form(
        app(&store),
        &format!("{}/update", copy.url()),
        &format!("book={}&imprint=&status=Loaned&due_back=2024-03-01", book.id),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Imprint must be specified"));
    let stored = BookInstanceRepository::find_by_id(&store, copy.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.instance, copy);
}

#[tokio::test]
async fn test_create_and_delete() {
    let (store, book, _) = catalog_with_copy();

    let created = post_form(
        app(&store),
        "/catalog/bookinstance/create",
        &format!("book={}&imprint=Bantam&status=Loaned&due_back=2024-03-01", book.id),
    )
    .await;
    assert_eq!(created.status, StatusCode::SEE_OTHER);
    let location = created.location.unwrap();
    let id: Uuid = location.rsplit('/').next().unwrap().parse().unwrap();
    assert_eq!(BookInstanceRepository::count(&store).await.unwrap(), 2);

    let detail = get(app(&store), &location).await;
    assert!(detail.body.contains("Mar 1, 2024"));

    let confirm = get(app(&store), &format!("{}/delete", location)).await;
    assert_eq!(confirm.status, StatusCode::OK);

    let deleted = post_form(
        app(&store),
        "/catalog/bookinstance/delete",
        &format!("bookinstanceid={}", id),
    )
    .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/bookinstances"));
    assert_eq!(BookInstanceRepository::count(&store).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_form_of_missing_copy_is_not_found() {
    let (store, _, _) = catalog_with_copy();
    let response = get(
        app(&store),
        &format!("/catalog/bookinstance/{}/delete", Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_for_unknown_book_shows_form_error() {
    let (store, _, _) = catalog_with_copy();

    let response = post_form(
        app(&store),
        "/catalog/bookinstance/create",
        &format!("book={}&imprint=Bantam&status=Available", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Book must be specified"));
    assert_eq!(BookInstanceRepository::count(&store).await.unwrap(), 1);
}
