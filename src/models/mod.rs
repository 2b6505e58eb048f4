//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookTitle};
pub use book_instance::{BookInstance, BookInstanceDetails, BookInstanceStatus, NewBookInstance};
pub use genre::{Genre, NewGenre};
