//! Book row, request body and list filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of `books`. Content columns are nullable on read: a full-replace update may store NULL.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub publisher: Option<String>,
}

/// POST/PUT body. `publish_date` is passed through as text and cast to `date` in SQL.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
    pub publisher: Option<String>,
}

impl BookInput {
    /// True when every field is present and non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.author, &self.publish_date, &self.publisher]
            .iter()
            .all(|f| f.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Query string of `GET /books`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
}

impl BookFilter {
    /// (column, value) pairs in fixed order; empty values are skipped.
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        [("title", &self.title), ("author", &self.author), ("publisher", &self.publisher)]
            .into_iter()
            .filter_map(|(col, v)| v.as_deref().filter(|s| !s.is_empty()).map(|s| (col, s)))
            .collect()
    }
}
