//! Author pages (read-only)

use maud::{html, Markup};

use super::layout::stored;
use crate::models::{Author, Book};

#[derive(Debug, Clone)]
pub struct AuthorListPage {
    pub title: String,
    pub author_list: Vec<Author>,
}

#[derive(Debug, Clone)]
pub struct AuthorDetailPage {
    pub title: String,
    pub author: Author,
    pub author_books: Vec<Book>,
}

pub fn list(page: &AuthorListPage) -> Markup {
    html! {
        h1 { (page.title) }
        @if page.author_list.is_empty() {
            p { "There are no authors." }
        } @else {
            ul {
                @for author in &page.author_list {
                    li {
                        a href=(author.url()) { (stored(&author.name())) }
                        " (" (author.lifespan()) ")"
                    }
                }
            }
        }
    }
}

pub fn detail(page: &AuthorDetailPage) -> Markup {
    html! {
        h1 { "Author: " (stored(&page.author.name())) }
        p { (page.author.lifespan()) }
        div {
            h4 { "Books" }
            @if page.author_books.is_empty() {
                p { "This author has no books." }
            } @else {
                dl {
                    @for book in &page.author_books {
                        dt { a href=(book.url()) { (stored(&book.title)) } }
                        dd { (stored(&book.summary)) }
                    }
                }
            }
        }
    }
}
