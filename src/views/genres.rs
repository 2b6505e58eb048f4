//! Genre pages

use maud::{html, Markup};

use super::layout::{field_errors, stored};
use crate::{
    models::{genre::GenreForm, Book, Genre},
    validation::FieldError,
};

#[derive(Debug, Clone)]
pub struct GenreListPage {
    pub title: String,
    pub genre_list: Vec<Genre>,
}

#[derive(Debug, Clone)]
pub struct GenreDetailPage {
    pub title: String,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

#[derive(Debug, Clone)]
pub struct GenreFormPage {
    pub title: String,
    pub genre: GenreForm,
    pub errors: Vec<FieldError>,
}

/// Delete confirmation; blocked while `genre_books` is not empty
#[derive(Debug, Clone)]
pub struct GenreDeletePage {
    pub title: String,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

pub fn list(page: &GenreListPage) -> Markup {
    html! {
        h1 { (page.title) }
        @if page.genre_list.is_empty() {
            p { "There are no genres." }
        } @else {
            ul {
                @for genre in &page.genre_list {
                    li { a href=(genre.url()) { (stored(&genre.name)) } }
                }
            }
        }
    }
}

fn books(books: &[Book]) -> Markup {
    html! {
        dl {
            @for book in books {
                dt { a href=(book.url()) { (stored(&book.title)) } }
                dd { (stored(&book.summary)) }
            }
        }
    }
}

pub fn detail(page: &GenreDetailPage) -> Markup {
    html! {
        h1 { "Genre: " (stored(&page.genre.name)) }
        div {
            h4 { "Books" }
            @if page.genre_books.is_empty() {
                p { "This genre has no books." }
            } @else {
                (books(&page.genre_books))
            }
        }
        hr;
        p {
            a href={ (page.genre.url()) "/update" } { "Update genre" }
            " | "
            a href={ (page.genre.url()) "/delete" } { "Delete genre" }
        }
    }
}

pub fn form(page: &GenreFormPage) -> Markup {
    html! {
        h1 { (page.title) }
        form method="POST" action="" {
            div.form-group {
                label for="name" { "Genre:" }
                input id="name" type="text" placeholder="Fantasy, Poetry etc." name="name" required value=(stored(&page.genre.name));
            }
            button type="submit" { "Submit" }
        }
        (field_errors(&page.errors))
    }
}

pub fn delete(page: &GenreDeletePage) -> Markup {
    html! {
        h1 { (page.title) ": " (stored(&page.genre.name)) }
        @if page.genre_books.is_empty() {
            p { "Do you really want to delete this genre?" }
            form method="POST" action="/catalog/genre/delete" {
                input id="genreid" type="hidden" name="genreid" required value=(page.genre.id.to_string());
                button type="submit" { "Delete" }
            }
        } @else {
            p { strong { "Delete the following books before attempting to delete this genre." } }
            div {
                h4 { "Books" }
                (books(&page.genre_books))
            }
        }
    }
}
