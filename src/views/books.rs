//! Book pages (read-only)

use maud::{html, Markup};

use super::layout::stored;
use crate::models::{Author, Book, BookInstance, BookInstanceStatus, Genre};

#[derive(Debug, Clone)]
pub struct BookListEntry {
    pub book: Book,
    /// `None` when the referenced author no longer exists
    pub author: Option<Author>,
}

#[derive(Debug, Clone)]
pub struct BookListPage {
    pub title: String,
    pub book_list: Vec<BookListEntry>,
}

#[derive(Debug, Clone)]
pub struct BookDetailPage {
    pub title: String,
    pub book: Book,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
    pub book_instances: Vec<BookInstance>,
}

pub fn list(page: &BookListPage) -> Markup {
    html! {
        h1 { (page.title) }
        @if page.book_list.is_empty() {
            p { "There are no books." }
        } @else {
            ul {
                @for entry in &page.book_list {
                    li {
                        a href=(entry.book.url()) { (stored(&entry.book.title)) }
                        @if let Some(author) = &entry.author {
                            " (" (stored(&author.name())) ")"
                        }
                    }
                }
            }
        }
    }
}

pub fn detail(page: &BookDetailPage) -> Markup {
    let book = &page.book;
    html! {
        h1 { "Title: " (stored(&book.title)) }
        p {
            strong { "Author: " }
            @if let Some(author) = &page.author {
                a href=(author.url()) { (stored(&author.name())) }
            } @else {
                "Unknown"
            }
        }
        p { strong { "Summary: " } (stored(&book.summary)) }
        p { strong { "ISBN: " } (stored(&book.isbn)) }
        p {
            strong { "Genre: " }
            @for (i, genre) in page.genres.iter().enumerate() {
                @if i > 0 { ", " }
                a href=(genre.url()) { (stored(&genre.name)) }
            }
        }
        div {
            h4 { "Copies" }
            @if page.book_instances.is_empty() {
                p { "There are no copies of this book in the library." }
            } @else {
                @for copy in &page.book_instances {
                    hr;
                    p { (copy.status.as_str()) }
                    p { strong { "Imprint: " } (stored(&copy.imprint)) }
                    @if copy.status != BookInstanceStatus::Available {
                        p { strong { "Due back: " } (copy.due_back_formatted()) }
                    }
                    p { strong { "Id: " } a href=(copy.url()) { (copy.id.to_string()) } }
                }
            }
        }
    }
}
