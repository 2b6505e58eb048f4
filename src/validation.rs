//! Form validation and sanitization pipeline.
//!
//! Every editable entity declares a single [`Schema`]: an ordered list of
//! [`FieldRule`]s, each made of sanitizer and check [`Step`]s. Applying a
//! schema to a submitted form never fails; it yields a [`Validated`] holding
//! the sanitized values (so a rejected form can be shown again with the
//! user's input) and the field errors in rule declaration order.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidateLength;

/// A single transform or check applied to a field value
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Strip surrounding whitespace
    Trim,
    /// Replace markup-significant characters with HTML entities
    Escape,
    /// Require at least this many characters
    MinLength(u64),
    /// Stop processing the field, without error, when the value is empty
    Optional,
    /// Require an ISO-8601 date and normalize it to `YYYY-MM-DD`
    IsoDate,
    /// Require one of the listed values
    OneOf(&'static [&'static str]),
    /// Require a well-formed entity id
    Id,
}

/// Rule for one form field. A rule reports at most one error: its message.
#[derive(Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    pub steps: &'static [Step],
}

impl FieldRule {
    /// Run the steps over a raw value. Once a check fails the remaining
    /// checks are skipped, sanitizers still run.
    fn run(&self, raw: &str) -> (String, bool) {
        let mut value = raw.to_string();
        let mut ok = true;

        for step in self.steps {
            match *step {
                Step::Trim => value = value.trim().to_string(),
                Step::Escape => value = escape(&value),
                Step::Optional => {
                    if value.is_empty() {
                        break;
                    }
                }
                Step::MinLength(min) => ok = ok && value.validate_length(Some(min), None, None),
                Step::IsoDate => {
                    if ok {
                        match parse_iso_date(&value) {
                            Some(date) => value = date.format("%Y-%m-%d").to_string(),
                            None => ok = false,
                        }
                    }
                }
                Step::OneOf(allowed) => ok = ok && allowed.contains(&value.as_str()),
                Step::Id => ok = ok && Uuid::parse_str(&value).is_ok(),
            }
        }

        (value, ok)
    }
}

/// Ordered field rules for one entity form
#[derive(Debug)]
pub struct Schema {
    pub rules: &'static [FieldRule],
}

impl Schema {
    /// Apply every rule to the submitted form. Missing fields count as empty.
    pub fn apply(&self, input: &HashMap<String, String>) -> Validated {
        let mut values = IndexMap::with_capacity(self.rules.len());
        let mut errors = Vec::new();

        for rule in self.rules {
            let raw = input.get(rule.field).map(String::as_str).unwrap_or("");
            let (value, ok) = rule.run(raw);
            if !ok {
                errors.push(FieldError {
                    field: rule.field,
                    message: rule.message,
                });
            }
            values.insert(rule.field, value);
        }

        Validated { values, errors }
    }
}

/// Error reported for a field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of applying a [`Schema`]
#[derive(Debug, Clone)]
pub struct Validated {
    values: IndexMap<&'static str, String>,
    errors: Vec<FieldError>,
}

impl Validated {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Sanitized value of a field, empty when the schema has no such field
    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }
}

/// HTML-escape a value the way form sanitizers conventionally do
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Local date-time forms accepted besides plain dates and RFC 3339
const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Accepts an ISO-8601 date or date-time, with or without offset, and keeps
/// the date part
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            LOCAL_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|dt| dt.date())
        })
}
