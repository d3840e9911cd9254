use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One watchlist entry. Lives only in memory; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub added_at: DateTime<Utc>,
}

impl Movie {
    /// Title and director are stored normalized: first letter uppercased,
    /// remainder lowercased.
    pub fn new(title: &str, year: i32, director: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: capitalize(title.trim()),
            year,
            director: capitalize(director.trim()),
            added_at: Utc::now(),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_names() {
        let movie = Movie::new("pulp FICTION", 1994, "quentin TARANTINO");
        assert_eq!(movie.title, "Pulp fiction");
        assert_eq!(movie.director, "Quentin tarantino");
        assert_eq!(movie.year, 1994);
    }

    #[test]
    fn test_capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("émilie"), "Émilie");
    }
}
