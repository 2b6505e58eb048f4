//! Shared page chrome: document shell, sidebar and the error page

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::{
    author::AUTHOR_LIST_URL, book::BOOK_LIST_URL, book_instance::BOOK_INSTANCE_LIST_URL,
    genre::GENRE_LIST_URL,
};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
nav { width: 14rem; padding: 1rem; background: #f4f4f4; min-height: 100vh; }
nav ul { list-style: none; padding: 0; }
nav li { margin: .4rem 0; }
main { padding: 1rem 2rem; flex: 1; }
.form-group { margin-bottom: 1rem; }
.form-group label { display: block; font-weight: bold; }
.errors { color: #a00; }
.text-success { color: #080; }
.text-danger { color: #a00; }
.text-warning { color: #b60; }
"#;

/// Text that was HTML-escaped when it was submitted
pub fn stored(text: &str) -> PreEscaped<&str> {
    PreEscaped(text)
}

/// Full HTML page. Titles are built from literals and stored text, so they
/// are spliced as already escaped.
pub fn document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (stored(title)) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (sidebar())
                main { (content) }
            }
        }
    }
}

fn sidebar() -> Markup {
    html! {
        nav {
            ul {
                li { a href="/catalog" { "Home" } }
                li { a href=(BOOK_LIST_URL) { "All books" } }
                li { a href=(AUTHOR_LIST_URL) { "All authors" } }
                li { a href=(GENRE_LIST_URL) { "All genres" } }
                li { a href=(BOOK_INSTANCE_LIST_URL) { "All book-instances" } }
            }
            hr;
            ul {
                li { a href="/catalog/genre/create" { "Create new genre" } }
                li { a href="/catalog/bookinstance/create" { "Create new book instance (copy)" } }
            }
        }
    }
}

/// Error list shown above a rejected form
pub fn field_errors(errors: &[crate::validation::FieldError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul.errors {
                @for error in errors {
                    li { (error.message) }
                }
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let heading = status.canonical_reason().unwrap_or("Error");
    document(
        heading,
        html! {
            h1 { (heading) }
            h2 { (status.as_u16()) }
            p { (message) }
        },
    )
}
