//! HTTP handlers and router for the catalog site

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod health;

use axum::{
    extract::FromRequest,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Ids arrive as path segments or form fields; anything that is not a
/// valid id cannot name a record.
pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound(format!("No record with id '{}'", raw)))
}

/// Form body extractor whose rejections render as an HTML error page
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct FormBody<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(catalog::index))
        // Genres
        .route("/genres", get(genres::list))
        .route("/genre/create", get(genres::create_form).post(genres::create))
        .route("/genre/delete", post(genres::delete))
        .route("/genre/:id", get(genres::detail))
        .route("/genre/:id/delete", get(genres::delete_form))
        .route("/genre/:id/update", get(genres::update_form).post(genres::update))
        // Book instances
        .route("/bookinstances", get(book_instances::list))
        .route(
            "/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create),
        )
        .route("/bookinstance/delete", post(book_instances::delete))
        .route("/bookinstance/:id", get(book_instances::detail))
        .route("/bookinstance/:id/delete", get(book_instances::delete_form))
        .route(
            "/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update),
        )
        // Books and authors
        .route("/books", get(books::list))
        .route("/book/:id", get(books::detail))
        .route("/authors", get(authors::list))
        .route("/author/:id", get(authors::detail));

    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/catalog", catalog)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
