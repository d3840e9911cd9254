use std::sync::Arc;

use crate::domain::entities::SearchPage;
use crate::domain::traits::MovieDatabaseClient;
use crate::domain::value_objects::SearchQuery;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// Orchestrates one remote search: a single request, no retry, no cache.
/// Stale responses from superseded searches are the caller's concern.
pub struct SearchService {
    client: Arc<dyn MovieDatabaseClient>,
}

impl SearchService {
    pub fn new(client: Arc<dyn MovieDatabaseClient>) -> Self {
        Self { client }
    }

    /// Fetch one page of results. Pages below 1 are treated as the first page.
    pub async fn search(&self, query: &SearchQuery, page: u32) -> AppResult<SearchPage> {
        let page = page.max(1);
        let source = self.client.source_name();

        LogContext::search_operation(query.title(), Some(source), None);
        let results = self.client.search(query, page).await?;
        LogContext::search_operation(query.title(), Some(source), Some(results.movies.len()));

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::MockMovieDatabaseClient;
    use crate::domain::value_objects::SearchKind;

    fn sample_query() -> SearchQuery {
        SearchQuery::new("inception", None, SearchKind::Movie).unwrap()
    }

    #[tokio::test]
    async fn test_search_delegates_to_client() {
        let mut client = MockMovieDatabaseClient::new();
        client.expect_source_name().return_const("test");
        client
            .expect_search()
            .withf(|query, page| query.title() == "inception" && *page == 3)
            .returning(|_, page| Ok(SearchPage::new(Vec::new(), 95, page, 10)));

        let service = SearchService::new(Arc::new(client));
        let results = service.search(&sample_query(), 3).await.unwrap();

        assert_eq!(results.total_count, 95);
        assert_eq!(results.page, 3);
    }

    #[tokio::test]
    async fn test_page_zero_becomes_first_page() {
        let mut client = MockMovieDatabaseClient::new();
        client.expect_source_name().return_const("test");
        client
            .expect_search()
            .withf(|_, page| *page == 1)
            .returning(|_, page| Ok(SearchPage::empty(page, 10)));

        let service = SearchService::new(Arc::new(client));
        let results = service.search(&sample_query(), 0).await.unwrap();

        assert_eq!(results.page, 1);
    }
}
