use chrono::{Datelike, Utc};

use crate::shared::errors::AppError;

/// First public film screening; OMDb has nothing earlier.
const FIRST_FILM_YEAR: i32 = 1888;

/// Watchlist entries only accept years from this one onwards.
const WATCHLIST_MIN_YEAR: i32 = 1900;

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        let title = title.trim();
        if title.len() < 2 {
            return Err(AppError::ValidationError(
                "Title must be at least 2 characters".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(year: i32) -> Result<(), AppError> {
        let current_year = Utc::now().year();
        if !(WATCHLIST_MIN_YEAR..=current_year).contains(&year) {
            return Err(AppError::ValidationError(format!(
                "Year must be between {} and {}",
                WATCHLIST_MIN_YEAR, current_year
            )));
        }
        Ok(())
    }

    pub fn validate_director(director: &str) -> Result<(), AppError> {
        let director = director.trim();
        if director.len() < 5 {
            return Err(AppError::ValidationError(
                "Director must be at least 5 characters".to_string(),
            ));
        }
        if director.len() > 255 {
            return Err(AppError::ValidationError(
                "Director too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_search_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_search_year(year: i32) -> Result<(), AppError> {
        // Allow next year for upcoming releases already listed remotely.
        let max_year = Utc::now().year() + 1;
        if !(FIRST_FILM_YEAR..=max_year).contains(&year) {
            return Err(AppError::ValidationError(format!(
                "Search year must be between {} and {}",
                FIRST_FILM_YEAR, max_year
            )));
        }
        Ok(())
    }

    pub fn validate_window(page_size: u32, max_visible: u32) -> Result<(), AppError> {
        if page_size == 0 {
            return Err(AppError::InvalidInput(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::InvalidInput(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        if max_visible == 0 {
            return Err(AppError::InvalidInput(
                "Visible page count must be positive".to_string(),
            ));
        }
        if max_visible > 100 {
            return Err(AppError::InvalidInput(
                "Visible page count cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
