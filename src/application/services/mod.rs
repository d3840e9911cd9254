pub mod search_service;
pub mod watchlist_service;

pub use search_service::SearchService;
pub use watchlist_service::WatchlistService;
