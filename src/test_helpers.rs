//! Shared fixtures for the unit tests.
//!
//! Services are exercised against a [`MemoryStore`]; books and authors have no
//! write workflow so they are inserted directly.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    models::{Author, Book, BookInstance, BookInstanceStatus, Genre},
    repository::{MemoryStore, Repository},
    views::{Outcome, Page},
};

pub fn repository(store: &MemoryStore) -> Repository {
    Repository::in_memory(store.clone())
}

/// Form body as the HTTP layer hands it over
pub fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn add_author(store: &MemoryStore, first_name: &str, family_name: &str) -> Author {
    let author = Author {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        family_name: family_name.to_string(),
        date_of_birth: None,
        date_of_death: None,
    };
    store.insert_author(author.clone());
    author
}

pub fn add_book(store: &MemoryStore, title: &str, author_id: Uuid, genre_ids: &[Uuid]) -> Book {
    let book = Book {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author_id,
        summary: format!("Summary of {}", title),
        isbn: "9780000000000".to_string(),
        genre_ids: genre_ids.to_vec(),
    };
    store.insert_book(book.clone());
    book
}

pub fn add_genre(store: &MemoryStore, name: &str) -> Genre {
    let genre = Genre {
        id: Uuid::new_v4(),
        name: name.to_string(),
    };
    store.insert_genre(genre.clone());
    genre
}

pub fn add_copy(store: &MemoryStore, book_id: Uuid, imprint: &str, status: BookInstanceStatus) -> BookInstance {
    let instance = BookInstance {
        id: Uuid::new_v4(),
        book_id,
        imprint: imprint.to_string(),
        status,
        due_back: None,
    };
    store.insert_book_instance(instance.clone());
    instance
}

/// Unwrap a rendered page, failing on redirects
pub fn rendered(outcome: Outcome) -> Page {
    match outcome {
        Outcome::Render(page) => page,
        Outcome::Redirect(location) => panic!("expected a page, got redirect to {}", location),
    }
}
