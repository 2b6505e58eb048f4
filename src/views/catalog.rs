//! Catalog home page

use maud::{html, Markup};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub books: i64,
    pub book_instances: i64,
    pub book_instances_available: i64,
    pub authors: i64,
    pub genres: i64,
}

#[derive(Debug, Clone)]
pub struct IndexPage {
    pub title: String,
    pub data: CatalogCounts,
}

pub fn index(page: &IndexPage) -> Markup {
    let data = &page.data;
    html! {
        h1 { (page.title) }
        p { "Welcome to the library catalog." }
        h2 { "Dynamic content" }
        p { "The library has the following record counts:" }
        ul {
            li { strong { "Books: " } (data.books) }
            li { strong { "Copies: " } (data.book_instances) }
            li { strong { "Copies available: " } (data.book_instances_available) }
            li { strong { "Authors: " } (data.authors) }
            li { strong { "Genres: " } (data.genres) }
        }
    }
}
