//! In-process integration tests driving the HTTP router

mod book_instances;
mod catalog;
mod common;
mod genres;
mod postgres;
