//! Genre model and its form schema

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{FieldRule, Schema, Step, Validated};

pub const GENRE_LIST_URL: &str = "/catalog/genres";

/// Genre record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    /// Stored as submitted through the form, already HTML-escaped
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        genre_url(self.id)
    }
}

pub fn genre_url(id: Uuid) -> String {
    format!("/catalog/genre/{}", id)
}

/// Create or update genre data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGenre {
    pub name: String,
}

/// Rules shared by the create and update forms
pub static GENRE_SCHEMA: Schema = Schema {
    rules: &[FieldRule {
        field: "name",
        message: "Genre name required",
        steps: &[Step::Trim, Step::MinLength(1), Step::Escape],
    }],
};

/// Values shown in the genre form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenreForm {
    pub name: String,
}

impl From<&Validated> for GenreForm {
    fn from(validated: &Validated) -> Self {
        Self {
            name: validated.value("name"),
        }
    }
}

impl From<&Genre> for GenreForm {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}

impl From<&GenreForm> for NewGenre {
    fn from(form: &GenreForm) -> Self {
        Self {
            name: form.name.clone(),
        }
    }
}
