//! Book instance (physical copy) model and its form schema

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::BookTitle;
use crate::{
    error::AppError,
    validation::{parse_iso_date, FieldRule, Schema, Step, Validated},
};

pub const BOOK_INSTANCE_LIST_URL: &str = "/catalog/bookinstances";

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Available,
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub const NAMES: &'static [&'static str] = &["Available", "Maintenance", "Loaned", "Reserved"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookInstanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookInstanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown book instance status '{}'", s)))
    }
}

/// Book instance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    /// Publisher and edition details, HTML-escaped
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub fn url(&self) -> String {
        book_instance_url(self.id)
    }

    /// Due date as shown to readers, e.g. "Mar 1, 2024"
    pub fn due_back_formatted(&self) -> String {
        self.due_back
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

pub fn book_instance_url(id: Uuid) -> String {
    format!("/catalog/bookinstance/{}", id)
}

/// Book instance together with the title of the book it copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookInstanceDetails {
    #[serde(flatten)]
    pub instance: BookInstance,
    pub book: BookTitle,
}

/// Create or update book instance data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookInstance {
    pub book_id: Uuid,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

/// Rules shared by the create and update forms
pub static BOOK_INSTANCE_SCHEMA: Schema = Schema {
    rules: &[
        FieldRule {
            field: "book",
            message: "Book must be specified",
            steps: &[Step::Trim, Step::MinLength(1), Step::Escape, Step::Id],
        },
        FieldRule {
            field: "imprint",
            message: "Imprint must be specified",
            steps: &[Step::Trim, Step::MinLength(1), Step::Escape],
        },
        FieldRule {
            field: "status",
            message: "Invalid status",
            steps: &[Step::Trim, Step::Escape, Step::OneOf(BookInstanceStatus::NAMES)],
        },
        FieldRule {
            field: "due_back",
            message: "Invalid date",
            steps: &[Step::Trim, Step::Optional, Step::IsoDate],
        },
    ],
};

/// Values shown in the book instance form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookInstanceForm {
    pub book: String,
    pub imprint: String,
    pub status: String,
    /// `YYYY-MM-DD` or the rejected input
    pub due_back: String,
}

impl From<&Validated> for BookInstanceForm {
    fn from(validated: &Validated) -> Self {
        Self {
            book: validated.value("book"),
            imprint: validated.value("imprint"),
            status: validated.value("status"),
            due_back: validated.value("due_back"),
        }
    }
}

impl From<&BookInstance> for BookInstanceForm {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.to_string(),
            due_back: instance
                .due_back
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

impl TryFrom<&BookInstanceForm> for NewBookInstance {
    type Error = AppError;

    fn try_from(form: &BookInstanceForm) -> Result<Self, Self::Error> {
        let book_id = Uuid::parse_str(&form.book)
            .map_err(|_| AppError::Validation("Book must be specified".to_string()))?;
        let due_back = if form.due_back.is_empty() {
            None
        } else {
            Some(
                parse_iso_date(&form.due_back)
                    .ok_or_else(|| AppError::Validation("Invalid date".to_string()))?,
            )
        };

        Ok(Self {
            book_id,
            imprint: form.imprint.clone(),
            status: form.status.parse()?,
            due_back,
        })
    }
}
