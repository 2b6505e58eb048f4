//! Server-rendered HTML views.
//!
//! Controllers never build markup themselves: they return an [`Outcome`],
//! either a typed [`Page`] (a view name plus the context that view needs) or
//! a redirect. Rendering happens at the HTTP boundary.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod layout;

use axum::response::{Html, IntoResponse, Redirect, Response};
use maud::Markup;

/// A view and its context
#[derive(Debug, Clone)]
pub enum Page {
    Index(catalog::IndexPage),
    GenreList(genres::GenreListPage),
    GenreDetail(genres::GenreDetailPage),
    GenreForm(genres::GenreFormPage),
    GenreDelete(genres::GenreDeletePage),
    BookInstanceList(book_instances::BookInstanceListPage),
    BookInstanceDetail(book_instances::BookInstanceDetailPage),
    BookInstanceForm(book_instances::BookInstanceFormPage),
    BookInstanceDelete(book_instances::BookInstanceDeletePage),
    BookList(books::BookListPage),
    BookDetail(books::BookDetailPage),
    AuthorList(authors::AuthorListPage),
    AuthorDetail(authors::AuthorDetailPage),
}

impl Page {
    pub fn view_name(&self) -> &'static str {
        match self {
            Page::Index(_) => "index",
            Page::GenreList(_) => "genre_list",
            Page::GenreDetail(_) => "genre_detail",
            Page::GenreForm(_) => "genre_form",
            Page::GenreDelete(_) => "genre_delete",
            Page::BookInstanceList(_) => "bookinstance_list",
            Page::BookInstanceDetail(_) => "bookinstance_detail",
            Page::BookInstanceForm(_) => "bookinstance_form",
            Page::BookInstanceDelete(_) => "bookinstance_delete",
            Page::BookList(_) => "book_list",
            Page::BookDetail(_) => "book_detail",
            Page::AuthorList(_) => "author_list",
            Page::AuthorDetail(_) => "author_detail",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Index(p) => &p.title,
            Page::GenreList(p) => &p.title,
            Page::GenreDetail(p) => &p.title,
            Page::GenreForm(p) => &p.title,
            Page::GenreDelete(p) => &p.title,
            Page::BookInstanceList(p) => &p.title,
            Page::BookInstanceDetail(p) => &p.title,
            Page::BookInstanceForm(p) => &p.title,
            Page::BookInstanceDelete(p) => &p.title,
            Page::BookList(p) => &p.title,
            Page::BookDetail(p) => &p.title,
            Page::AuthorList(p) => &p.title,
            Page::AuthorDetail(p) => &p.title,
        }
    }

    pub fn render(&self) -> Markup {
        let content = match self {
            Page::Index(p) => catalog::index(p),
            Page::GenreList(p) => genres::list(p),
            Page::GenreDetail(p) => genres::detail(p),
            Page::GenreForm(p) => genres::form(p),
            Page::GenreDelete(p) => genres::delete(p),
            Page::BookInstanceList(p) => book_instances::list(p),
            Page::BookInstanceDetail(p) => book_instances::detail(p),
            Page::BookInstanceForm(p) => book_instances::form(p),
            Page::BookInstanceDelete(p) => book_instances::delete(p),
            Page::BookList(p) => books::list(p),
            Page::BookDetail(p) => books::detail(p),
            Page::AuthorList(p) => authors::list(p),
            Page::AuthorDetail(p) => authors::detail(p),
        };
        layout::document(self.title(), content)
    }
}

/// What a controller decided to answer
#[derive(Debug, Clone)]
pub enum Outcome {
    Render(Page),
    Redirect(String),
}

impl Outcome {
    pub fn redirect(location: impl Into<String>) -> Self {
        Outcome::Redirect(location.into())
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Render(_) => None,
            Outcome::Redirect(location) => Some(location),
        }
    }
}

impl From<Page> for Outcome {
    fn from(page: Page) -> Self {
        Outcome::Render(page)
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(page) => {
                tracing::debug!(view = page.view_name(), "Rendering page");
                Html(page.render().into_string()).into_response()
            }
            Outcome::Redirect(location) => Redirect::to(&location).into_response(),
        }
    }
}
