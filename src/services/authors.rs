//! Author pages (read-only)

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
    views::{
        authors::{AuthorDetailPage, AuthorListPage},
        Outcome, Page,
    },
};

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Outcome> {
        let author_list = self.repository.authors.list().await?;
        Ok(Page::AuthorList(AuthorListPage {
            title: "Author List".to_string(),
            author_list,
        })
        .into())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<Outcome> {
        let (author, author_books) = tokio::try_join!(
            self.repository.authors.find_by_id(id),
            self.repository.books.find_by_author(id),
        )?;
        let author = author.ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

        Ok(Page::AuthorDetail(AuthorDetailPage {
            title: "Author Detail".to_string(),
            author,
            author_books,
        })
        .into())
    }
}
