//! Catalog home page and readiness probe

use crate::{
    error::AppResult,
    models::BookInstanceStatus,
    repository::Repository,
    views::{
        catalog::{CatalogCounts, IndexPage},
        Outcome, Page,
    },
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record counts for the home page, gathered concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (books, book_instances, book_instances_available, authors, genres) = tokio::try_join!(
            self.repository.books.count(),
            self.repository.book_instances.count(),
            self.repository
                .book_instances
                .count_by_status(BookInstanceStatus::Available),
            self.repository.authors.count(),
            self.repository.genres.count(),
        )?;

        Ok(CatalogCounts {
            books,
            book_instances,
            book_instances_available,
            authors,
            genres,
        })
    }

    pub async fn index(&self) -> AppResult<Outcome> {
        let data = self.counts().await?;
        Ok(Page::Index(IndexPage {
            title: "Local Library Home".to_string(),
            data,
        })
        .into())
    }

    /// Cheap round trip to the storage backend
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.genres.count().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        error::AppError,
        repository::{book_instances::MockBookInstanceRepository, MemoryStore},
        test_helpers::*,
    };

    #[tokio::test]
    async fn test_counts_seeded_catalog() {
        let store = MemoryStore::new();
        store.seed_sample_catalog();

        let counts = CatalogService::new(repository(&store)).counts().await.unwrap();

        assert_eq!(
            counts,
            CatalogCounts {
                books: 2,
                book_instances: 4,
                book_instances_available: 2,
                authors: 2,
                genres: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_index_fails_when_a_count_fails() {
        let store = MemoryStore::new();
        let mut copies = MockBookInstanceRepository::new();
        copies.expect_count().returning(|| Ok(0));
        copies
            .expect_count_by_status()
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));
        let mut failing = repository(&store);
        failing.book_instances = Arc::new(copies);

        let err = CatalogService::new(failing).index().await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
