use serde::{Deserialize, Serialize};

use super::MovieSummary;

/// One page of remote search results. Derived per response, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub movies: Vec<MovieSummary>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl SearchPage {
    pub fn new(movies: Vec<MovieSummary>, total_count: u64, page: u32, page_size: u32) -> Self {
        Self {
            movies,
            total_count,
            page,
            page_size,
        }
    }

    pub fn empty(page: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), 0, page, page_size)
    }

    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let total_pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(total_pages).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(SearchPage::new(Vec::new(), 95, 1, 10).total_pages(), 10);
        assert_eq!(SearchPage::new(Vec::new(), 100, 1, 10).total_pages(), 10);
        assert_eq!(SearchPage::new(Vec::new(), 101, 1, 10).total_pages(), 11);
        assert_eq!(SearchPage::empty(1, 10).total_pages(), 0);
    }
}
