//! Repository layer for catalog storage

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod memory;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use authors::AuthorRepository;
pub use book_instances::BookInstanceRepository;
pub use books::BookRepository;
pub use genres::GenreRepository;
pub use memory::MemoryStore;

/// Entity repositories shared by all services
#[derive(Clone)]
pub struct Repository {
    pub genres: Arc<dyn GenreRepository>,
    pub books: Arc<dyn BookRepository>,
    pub book_instances: Arc<dyn BookInstanceRepository>,
    pub authors: Arc<dyn AuthorRepository>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            genres: Arc::new(genres::PgGenreRepository::new(pool.clone())),
            books: Arc::new(books::PgBookRepository::new(pool.clone())),
            book_instances: Arc::new(book_instances::PgBookInstanceRepository::new(pool.clone())),
            authors: Arc::new(authors::PgAuthorRepository::new(pool)),
        }
    }

    /// Create a repository where every entity lives in `store`
    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            genres: Arc::new(store.clone()),
            books: Arc::new(store.clone()),
            book_instances: Arc::new(store.clone()),
            authors: Arc::new(store),
        }
    }
}
