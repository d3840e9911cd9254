use serde::Serialize;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

use super::SearchKind;

/// One movie search request. Validated on construction and immutable once
/// issued; paging through results reuses the same query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    title: String,
    year: Option<i32>,
    kind: SearchKind,
}

impl SearchQuery {
    pub fn new(title: &str, year: Option<i32>, kind: SearchKind) -> AppResult<Self> {
        let title = title.trim();
        Validator::validate_search_title(title)?;
        if let Some(year) = year {
            Validator::validate_search_year(year)?;
        }

        Ok(Self {
            title: title.to_string(),
            year,
            kind,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }
}
