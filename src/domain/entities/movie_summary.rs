use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SearchKind;

/// One result row from the remote movie database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// First release year; series arrive with ranged years upstream.
    pub year: Option<i32>,
    pub kind: SearchKind,
    pub poster_url: Option<String>,
}
