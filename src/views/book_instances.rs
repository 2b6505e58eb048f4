//! Book instance pages

use maud::{html, Markup};

use super::layout::{field_errors, stored};
use crate::{
    models::{
        book_instance::BookInstanceForm, BookInstanceDetails, BookInstanceStatus, BookTitle,
    },
    validation::FieldError,
};

#[derive(Debug, Clone)]
pub struct BookInstanceListPage {
    pub title: String,
    pub bookinstance_list: Vec<BookInstanceDetails>,
}

#[derive(Debug, Clone)]
pub struct BookInstanceDetailPage {
    pub title: String,
    pub bookinstance: BookInstanceDetails,
}

#[derive(Debug, Clone)]
pub struct BookInstanceFormPage {
    pub title: String,
    pub book_list: Vec<BookTitle>,
    /// Id of the book to preselect in the selector
    pub selected_book: Option<String>,
    pub bookinstance: BookInstanceForm,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone)]
pub struct BookInstanceDeletePage {
    pub title: String,
    pub bookinstance: BookInstanceDetails,
}

fn status_class(status: BookInstanceStatus) -> &'static str {
    match status {
        BookInstanceStatus::Available => "text-success",
        BookInstanceStatus::Maintenance => "text-danger",
        BookInstanceStatus::Loaned | BookInstanceStatus::Reserved => "text-warning",
    }
}

fn status_line(copy: &BookInstanceDetails) -> Markup {
    let instance = &copy.instance;
    html! {
        span class=(status_class(instance.status)) { (instance.status.as_str()) }
        @if instance.status != BookInstanceStatus::Available && instance.due_back.is_some() {
            " (Due: " (instance.due_back_formatted()) ")"
        }
    }
}

pub fn list(page: &BookInstanceListPage) -> Markup {
    html! {
        h1 { (page.title) }
        @if page.bookinstance_list.is_empty() {
            p { "There are no book copies in this library." }
        } @else {
            ul {
                @for copy in &page.bookinstance_list {
                    li {
                        a href=(copy.instance.url()) {
                            (stored(&copy.book.title)) " : " (stored(&copy.instance.imprint))
                        }
                        " - "
                        (status_line(copy))
                    }
                }
            }
        }
    }
}

fn summary(copy: &BookInstanceDetails) -> Markup {
    html! {
        p {
            strong { "Title: " }
            a href=(copy.book.url()) { (stored(&copy.book.title)) }
        }
        p { strong { "Imprint: " } (stored(&copy.instance.imprint)) }
        p { strong { "Status: " } (status_line(copy)) }
    }
}

pub fn detail(page: &BookInstanceDetailPage) -> Markup {
    let copy = &page.bookinstance;
    html! {
        h1 { "ID: " (copy.instance.id.to_string()) }
        (summary(copy))
        hr;
        p {
            a href={ (copy.instance.url()) "/update" } { "Update book instance" }
            " | "
            a href={ (copy.instance.url()) "/delete" } { "Delete book instance" }
        }
    }
}

pub fn form(page: &BookInstanceFormPage) -> Markup {
    let values = &page.bookinstance;
    let selected_book = page.selected_book.as_deref().unwrap_or("");
    html! {
        h1 { (page.title) }
        form method="POST" action="" {
            div.form-group {
                label for="book" { "Book:" }
                select id="book" name="book" required {
                    @for book in &page.book_list {
                        @let id = book.id.to_string();
                        option value=(id) selected[id == selected_book] { (stored(&book.title)) }
                    }
                }
            }
            div.form-group {
                label for="imprint" { "Imprint:" }
                input id="imprint" type="text" placeholder="Publisher and date information" name="imprint" required value=(stored(&values.imprint));
            }
            div.form-group {
                label for="due_back" { "Date when book available:" }
                input id="due_back" type="date" name="due_back" value=(values.due_back);
            }
            div.form-group {
                label for="status" { "Status:" }
                select id="status" name="status" required {
                    @for status in BookInstanceStatus::ALL {
                        option value=(status.as_str()) selected[values.status == status.as_str()] { (status.as_str()) }
                    }
                }
            }
            button type="submit" { "Submit" }
        }
        (field_errors(&page.errors))
    }
}

pub fn delete(page: &BookInstanceDeletePage) -> Markup {
    let copy = &page.bookinstance;
    html! {
        h1 { (page.title) }
        p { "Do you really want to delete this book instance?" }
        (summary(copy))
        form method="POST" action="/catalog/bookinstance/delete" {
            input id="bookinstanceid" type="hidden" name="bookinstanceid" required value=(copy.instance.id.to_string());
            button type="submit" { "Delete" }
        }
    }
}
