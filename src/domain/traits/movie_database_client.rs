use async_trait::async_trait;

use crate::domain::entities::SearchPage;
use crate::domain::value_objects::SearchQuery;
use crate::shared::errors::AppResult;

/// Seam between search orchestration and a concrete movie-database backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieDatabaseClient: Send + Sync {
    fn source_name(&self) -> &'static str;

    /// Fetch one page of results for `query`.
    async fn search(&self, query: &SearchQuery, page: u32) -> AppResult<SearchPage>;
}
