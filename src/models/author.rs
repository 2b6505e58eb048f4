//! Author model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const AUTHOR_LIST_URL: &str = "/catalog/authors";

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    pub fn url(&self) -> String {
        author_url(self.id)
    }

    /// "Family, First"
    pub fn name(&self) -> String {
        match (self.family_name.is_empty(), self.first_name.is_empty()) {
            (false, false) => format!("{}, {}", self.family_name, self.first_name),
            (false, true) => self.family_name.clone(),
            (true, _) => self.first_name.clone(),
        }
    }

    /// "1892-01-03 - 1973-09-02", either side blank when unknown
    pub fn lifespan(&self) -> String {
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        format!("{} - {}", fmt(self.date_of_birth), fmt(self.date_of_death))
    }
}

pub fn author_url(id: Uuid) -> String {
    format!("/catalog/author/{}", id)
}
