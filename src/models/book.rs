//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const BOOK_LIST_URL: &str = "/catalog/books";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub summary: String,
    pub isbn: String,
    /// Genres the book belongs to
    pub genre_ids: Vec<Uuid>,
}

impl Book {
    pub fn url(&self) -> String {
        book_url(self.id)
    }

    pub fn in_genre(&self, genre_id: Uuid) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

pub fn book_url(id: Uuid) -> String {
    format!("/catalog/book/{}", id)
}

/// Title-only projection, used to fill book selectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookTitle {
    pub id: Uuid,
    pub title: String,
}

impl BookTitle {
    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

impl From<&Book> for BookTitle {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}
