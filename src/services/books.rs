//! Book pages (read-only)

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
    views::{
        books::{BookDetailPage, BookListEntry, BookListPage},
        Outcome, Page,
    },
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books with their authors
    pub async fn list(&self) -> AppResult<Outcome> {
        let (books, authors) = tokio::try_join!(
            self.repository.books.list(),
            self.repository.authors.list(),
        )?;
        let authors: HashMap<Uuid, _> = authors.into_iter().map(|a| (a.id, a)).collect();

        let book_list = books
            .into_iter()
            .map(|book| BookListEntry {
                author: authors.get(&book.author_id).cloned(),
                book,
            })
            .collect();

        Ok(Page::BookList(BookListPage {
            title: "Book List".to_string(),
            book_list,
        })
        .into())
    }

    /// Book with its author, genres and copies
    pub async fn detail(&self, id: Uuid) -> AppResult<Outcome> {
        let (book, book_instances) = tokio::try_join!(
            self.repository.books.find_by_id(id),
            self.repository.book_instances.find_by_book(id),
        )?;
        let book = book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        let (author, genres) = tokio::try_join!(
            self.repository.authors.find_by_id(book.author_id),
            self.repository.genres.find_by_ids(&book.genre_ids),
        )?;

        Ok(Page::BookDetail(BookDetailPage {
            title: book.title.clone(),
            book,
            author,
            genres,
            book_instances,
        })
        .into())
    }
}
