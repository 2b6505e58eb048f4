//! Page controllers: each operation validates its input, talks to the
//! repositories and answers with an [`Outcome`](crate::views::Outcome).

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub genres: genres::GenreService,
    pub book_instances: book_instances::BookInstanceService,
    pub books: books::BookService,
    pub authors: authors::AuthorService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            genres: genres::GenreService::new(repository.clone()),
            book_instances: book_instances::BookInstanceService::new(repository.clone()),
            books: books::BookService::new(repository.clone()),
            authors: authors::AuthorService::new(repository),
        }
    }
}
