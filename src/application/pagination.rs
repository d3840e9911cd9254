//! Windowed pagination over a remote result set.
//!
//! Computed fresh from each search response; nothing is kept between calls.

use serde::{Deserialize, Serialize};

use crate::domain::entities::SearchPage;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Maximum number of page buttons to lay out at once.
pub const MAX_VISIBLE_PAGES: u32 = 10;

/// Navigation layout for one page of search results.
///
/// `pages` is a contiguous ascending run of page numbers, at most
/// `max_visible` long, bounded by `[1, total_pages]` and containing the
/// clamped current page whenever any page exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    pub pages: Vec<u32>,
    pub current_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_target: Option<u32>,
    pub next_target: Option<u32>,
}

impl PaginationWindow {
    /// Layout for a search page, using the crate-wide button budget.
    pub fn for_page(page: &SearchPage) -> AppResult<Self> {
        Self::compute(
            page.total_count,
            page.page_size,
            page.page,
            MAX_VISIBLE_PAGES,
        )
    }

    pub fn compute(
        total_count: u64,
        page_size: u32,
        current_page: u32,
        max_visible: u32,
    ) -> AppResult<Self> {
        Validator::validate_window(page_size, max_visible)?;

        let total_pages = total_count.div_ceil(u64::from(page_size));
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);
        if total_pages == 0 {
            return Ok(Self::empty());
        }

        // Out-of-range pages are clamped, never rejected.
        let current_page = current_page.clamp(1, total_pages);

        let mut start = current_page.saturating_sub(max_visible / 2).max(1);
        let mut end = start.saturating_add(max_visible - 1);
        if end > total_pages {
            end = total_pages;
            start = end.saturating_sub(max_visible - 1).max(1);
        }

        let has_previous = start > 1;
        let has_next = end < total_pages;

        Ok(Self {
            pages: (start..=end).collect(),
            current_page,
            has_previous,
            has_next,
            // Previous/next jump to just outside the visible window, not ±1.
            previous_target: has_previous.then(|| start - 1),
            next_target: has_next.then(|| end + 1),
        })
    }

    /// No results: nothing to render, no affordances.
    fn empty() -> Self {
        Self {
            pages: Vec::new(),
            current_page: 0,
            has_previous: false,
            has_next: false,
            previous_target: None,
            next_target: None,
        }
    }
}
