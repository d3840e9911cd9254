use serde::{Deserialize, Serialize};

/// Search endpoint envelope. OMDb reports failures in-band: HTTP 200 with
/// `Response: "False"` and an `Error` message, and no `Search` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbMovieDto>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbMovieDto {
    #[serde(rename = "Title")]
    pub title: String,
    /// Year as OMDb sends it, possibly ranged ("2010–2014") for series.
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    /// Poster URL, or the literal "N/A".
    #[serde(rename = "Poster")]
    pub poster: String,
}
