//! Movie watchlist and OMDb search with windowed pagination.
//!
//! The crate keeps an in-memory movie list, queries the OMDb search API one
//! page at a time, and computes which page buttons a frontend should render
//! for the current result set. Rendering itself is out of scope; every
//! public type serializes so any frontend boundary can consume it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::pagination::{PaginationWindow, MAX_VISIBLE_PAGES};
pub use application::services::{SearchService, WatchlistService};
pub use domain::entities::{Movie, MovieSummary, SearchPage};
pub use domain::traits::MovieDatabaseClient;
pub use domain::value_objects::{SearchKind, SearchQuery, SortKey};
pub use infrastructure::external::omdb::{OmdbClient, OMDB_PAGE_SIZE};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;
