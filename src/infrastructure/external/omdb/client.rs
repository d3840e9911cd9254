use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::env;

use crate::domain::entities::{MovieSummary, SearchPage};
use crate::domain::traits::MovieDatabaseClient;
use crate::domain::value_objects::SearchQuery;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::{dto::OmdbSearchResponse, mapper::OmdbMapper};

/// Results per page as fixed by the OMDb search endpoint.
pub const OMDB_PAGE_SIZE: u32 = 10;

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("Cinetheque/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Read the API key from `OMDB_API_KEY`; a `.env` file is honored.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OMDB_API_KEY")
            .map_err(|_| AppError::ConfigError("OMDB_API_KEY is not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError("OMDB_API_KEY is empty".to_string()));
        }

        Ok(match env::var("OMDB_BASE_URL") {
            Ok(base_url) => Self::new(api_key)?.with_base_url(&base_url),
            Err(_) => Self::new(api_key)?,
        })
    }

    /// Point the client at a different endpoint (for testing).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    fn build_search_url(&self, query: &SearchQuery, page: u32) -> String {
        let mut url = format!(
            "{}?apikey={}&s={}&page={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query.title()),
            page
        );
        if let Some(year) = query.year() {
            url.push_str(&format!("&y={}", year));
        }
        if let Some(kind) = query.kind().as_query_param() {
            url.push_str(&format!("&type={}", kind));
        }
        url
    }

    fn handle_response_status(status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized(
                "OMDb rejected the API key".to_string(),
            )),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(
                "OMDb rate limit exceeded".to_string(),
            )),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => Err(
                AppError::ExternalServiceError("OMDb service unavailable".to_string()),
            ),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }

    /// An absent match is an empty page; anything else is a real error.
    fn map_failure(error: Option<String>, page: u32) -> AppResult<SearchPage> {
        match error.as_deref() {
            Some("Movie not found!") | Some("Too many results.") => {
                Ok(SearchPage::empty(page, OMDB_PAGE_SIZE))
            }
            Some("Invalid API key!") => Err(AppError::Unauthorized(
                "OMDb rejected the API key".to_string(),
            )),
            Some(message) => Err(AppError::ApiError(format!("OMDb error: {}", message))),
            None => Err(AppError::ApiError(
                "OMDb reported failure without a message".to_string(),
            )),
        }
    }
}

#[async_trait]
impl MovieDatabaseClient for OmdbClient {
    fn source_name(&self) -> &'static str {
        "OMDb"
    }

    async fn search(&self, query: &SearchQuery, page: u32) -> AppResult<SearchPage> {
        let url = self.build_search_url(query, page);

        // Never log the URL itself, it carries the API key.
        LogContext::api_call("OMDb", "search", "start", None);
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("OMDb search failed: {}", e)))?;

        Self::handle_response_status(response.status())?;

        let body = response
            .json::<OmdbSearchResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse OMDb response: {}", e)))?;

        LogContext::api_call(
            "OMDb",
            "search",
            "done",
            Some(start.elapsed().as_millis() as u64),
        );

        if body.response != "True" {
            return Self::map_failure(body.error, page);
        }

        let total_count = body
            .total_results
            .as_deref()
            .unwrap_or("0")
            .parse::<u64>()
            .map_err(|e| {
                AppError::SerializationError(format!("Invalid totalResults from OMDb: {}", e))
            })?;

        let movies: Vec<MovieSummary> = body.search.into_iter().map(OmdbMapper::to_domain).collect();

        Ok(SearchPage::new(movies, total_count, page, OMDB_PAGE_SIZE))
    }
}
