use regex::Regex;

use crate::domain::entities::MovieSummary;
use crate::domain::value_objects::SearchKind;

use super::dto::OmdbMovieDto;

pub struct OmdbMapper;

impl OmdbMapper {
    pub fn to_domain(dto: OmdbMovieDto) -> MovieSummary {
        MovieSummary {
            imdb_id: dto.imdb_id,
            title: dto.title,
            year: Self::parse_year(&dto.year),
            kind: SearchKind::from(dto.kind.as_str()),
            poster_url: Self::map_poster(dto.poster),
        }
    }

    /// OMDb sends years as strings; ranged values keep their first year.
    fn parse_year(year: &str) -> Option<i32> {
        let re = Regex::new(r"\d{4}").unwrap();
        re.find(year).and_then(|m| m.as_str().parse::<i32>().ok())
    }

    fn map_poster(poster: String) -> Option<String> {
        if poster.is_empty() || poster == "N/A" {
            None
        } else {
            Some(poster)
        }
    }
}
