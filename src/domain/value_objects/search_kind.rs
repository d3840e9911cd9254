use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result kind filter understood by the remote movie database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Any,
    Movie,
    Series,
    Episode,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Any => "any",
            SearchKind::Movie => "movie",
            SearchKind::Series => "series",
            SearchKind::Episode => "episode",
        }
    }

    /// Value for the request's `type` parameter; `Any` sends none.
    pub fn as_query_param(&self) -> Option<&'static str> {
        match self {
            SearchKind::Any => None,
            kind => Some(kind.as_str()),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SearchKind {
    fn from(s: &str) -> Self {
        match s {
            "movie" => SearchKind::Movie,
            "series" => SearchKind::Series,
            "episode" => SearchKind::Episode,
            _ => SearchKind::Any,
        }
    }
}

impl From<String> for SearchKind {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for SearchKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
