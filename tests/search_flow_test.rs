//! End-to-end search flow over a fake movie-database client
//!
//! Tests cover:
//! - One search returning a page plus its navigation layout
//! - Paging through a larger result set via the window's jump targets
//! - Error pass-through from the client

use std::sync::Arc;

use async_trait::async_trait;

use cinetheque::{
    AppError, AppResult, MovieDatabaseClient, MovieSummary, PaginationWindow, SearchKind,
    SearchPage, SearchQuery, SearchService, OMDB_PAGE_SIZE,
};

/// Serves slices of a fixed result set, like a remote database would.
struct FakeMovieDatabase {
    total_count: u64,
}

#[async_trait]
impl MovieDatabaseClient for FakeMovieDatabase {
    fn source_name(&self) -> &'static str {
        "fake"
    }

    async fn search(&self, query: &SearchQuery, page: u32) -> AppResult<SearchPage> {
        if query.title() == "unreachable" {
            return Err(AppError::ExternalServiceError("Request timeout".to_string()));
        }

        let first = u64::from(page - 1) * u64::from(OMDB_PAGE_SIZE);
        let movies: Vec<MovieSummary> = (first..self.total_count)
            .take(OMDB_PAGE_SIZE as usize)
            .map(|n| MovieSummary {
                imdb_id: format!("tt{:07}", n),
                title: format!("{} {}", query.title(), n),
                year: Some(2000),
                kind: SearchKind::Movie,
                poster_url: None,
            })
            .collect();

        Ok(SearchPage::new(movies, self.total_count, page, OMDB_PAGE_SIZE))
    }
}

fn service(total_count: u64) -> SearchService {
    SearchService::new(Arc::new(FakeMovieDatabase { total_count }))
}

#[tokio::test]
async fn test_search_returns_page_and_navigation_layout() {
    let query = SearchQuery::new("inception", None, SearchKind::Any).unwrap();

    let page = service(95).search(&query, 1).await.unwrap();
    assert_eq!(page.movies.len(), 10);
    assert_eq!(page.total_count, 95);
    assert_eq!(page.total_pages(), 10);

    // All ten pages fit in one window, so no affordances.
    let window = PaginationWindow::for_page(&page).unwrap();
    assert_eq!(window.pages, (1..=10).collect::<Vec<_>>());
    assert!(!window.has_previous);
    assert!(!window.has_next);
}

#[tokio::test]
async fn test_last_page_holds_the_remainder() {
    let query = SearchQuery::new("inception", None, SearchKind::Any).unwrap();

    let page = service(95).search(&query, 10).await.unwrap();
    assert_eq!(page.movies.len(), 5);
}

#[tokio::test]
async fn test_jump_targets_drive_the_next_search() {
    let query = SearchQuery::new("dune", None, SearchKind::Movie).unwrap();
    let service = service(250);

    // Mid-set: the window centers and both jump targets appear.
    let page = service.search(&query, 15).await.unwrap();
    let window = PaginationWindow::for_page(&page).unwrap();
    assert_eq!(window.pages, (10..=19).collect::<Vec<_>>());
    assert_eq!(window.previous_target, Some(9));
    assert_eq!(window.next_target, Some(20));

    // Re-issuing the search with the next target lands past the old window.
    let page = service.search(&query, window.next_target.unwrap()).await.unwrap();
    assert_eq!(page.page, 20);
    let window = PaginationWindow::for_page(&page).unwrap();
    assert!(window.pages.contains(&20));

    // At the tail the window shifts back and "next" disappears.
    let page = service.search(&query, 25).await.unwrap();
    let window = PaginationWindow::for_page(&page).unwrap();
    assert_eq!(window.pages, (16..=25).collect::<Vec<_>>());
    assert!(!window.has_next);
    assert_eq!(window.previous_target, Some(15));
}

#[tokio::test]
async fn test_empty_result_set_renders_nothing() {
    let query = SearchQuery::new("inception", None, SearchKind::Any).unwrap();

    let page = service(0).search(&query, 1).await.unwrap();
    assert!(page.is_empty());

    let window = PaginationWindow::for_page(&page).unwrap();
    assert!(window.pages.is_empty());
    assert!(!window.has_previous);
    assert!(!window.has_next);
}

#[tokio::test]
async fn test_client_errors_pass_through() {
    let query = SearchQuery::new("unreachable", None, SearchKind::Any).unwrap();

    let err = service(95).search(&query, 1).await.unwrap_err();
    assert!(matches!(err, AppError::ExternalServiceError(_)));
}
