use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Create/update request body, pre-validation. `published_date` stays a raw
/// string so a bad date yields a field-keyed message rather than a
/// deserialization failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

/// A fully validated book, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
}
