//! Library catalog server
//!
//! A server-rendered web catalog of a small library: genres, books, authors
//! and the physical copies (book instances) the library holds. Genres and
//! book instances can be created, updated and deleted through HTML forms.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(repository: repository::Repository) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
