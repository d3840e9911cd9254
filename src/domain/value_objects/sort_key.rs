use serde::{Deserialize, Serialize};
use std::fmt;

/// Watchlist ordering. `Title` sorts ascending, `Year` newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Year,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Year => "year",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "year" => SortKey::Year,
            _ => SortKey::Title,
        }
    }
}
