use uuid::Uuid;

use crate::domain::entities::Movie;
use crate::domain::value_objects::SortKey;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// In-memory movie list. Lives and dies with its owner; single-threaded
/// by contract.
#[derive(Default)]
pub struct WatchlistService {
    movies: Vec<Movie>,
}

impl WatchlistService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize and append a new entry.
    pub fn add(&mut self, title: &str, year: i32, director: &str) -> AppResult<Movie> {
        Validator::validate_movie_title(title)?;
        Validator::validate_release_year(year)?;
        Validator::validate_director(director)?;

        let movie = Movie::new(title, year, director);
        log::debug!("Watchlist: added '{}' ({})", movie.title, movie.year);
        self.movies.push(movie.clone());

        Ok(movie)
    }

    pub fn remove(&mut self, id: &Uuid) -> AppResult<Movie> {
        let index = self
            .movies
            .iter()
            .position(|movie| movie.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))?;

        let movie = self.movies.remove(index);
        log::debug!("Watchlist: removed '{}'", movie.title);

        Ok(movie)
    }

    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Title => self
                .movies
                .sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
            SortKey::Year => self.movies.sort_by(|a, b| b.year.cmp(&a.year)),
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
