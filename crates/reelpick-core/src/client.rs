//! HTTP client for the TMDB API.
//!
//! This module provides a paced HTTP client carrying the static bearer
//! credential, with upstream status codes mapped onto [`TmdbError`]
//! variants. The base URL is injectable so tests can point the client at
//! a local mock server.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{Result, TmdbError};
use crate::query::DiscoverQuery;
use crate::types::DiscoverResponse;

/// Base URL for the TMDB API
const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum requests per second (well under TMDB's ~50/s limit)
const DEFAULT_REQUESTS_PER_SECOND: f64 = 10.0;

/// Pacer to keep request frequency polite
///
/// Ensures requests are spaced at least `min_interval` apart.
#[derive(Debug)]
pub struct RequestPacer {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Mutex<Instant>,
}

impl RequestPacer {
    /// Create a new pacer allowing the given requests per second.
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            min_interval,
            last_request: Mutex::new(Instant::now() - min_interval),
        }
    }

    /// Wait until the next request is allowed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// Minimum interval between requests.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the TMDB client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: the public TMDB v3 endpoint)
    pub base_url: String,
    /// Static bearer credential sent in the Authorization header
    pub bearer_token: String,
    /// Maximum requests per second (default: 10.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the credential.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: TMDB_BASE_URL.to_string(),
            bearer_token: bearer_token.into(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Paced, authenticated HTTP client for the TMDB API
#[derive(Debug)]
pub struct TmdbClient {
    /// Underlying HTTP client carrying the default headers
    client: reqwest::Client,
    /// API base URL without a trailing slash
    base_url: String,
    /// Pacer for request throttling
    pacer: RequestPacer,
}

impl TmdbClient {
    /// Create a client for the public TMDB API.
    ///
    /// # Errors
    /// Returns `TmdbError::InvalidCredential` if the token is empty or
    /// not a valid header value, or an error if the HTTP client cannot
    /// be created.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(bearer_token))
    }

    /// Create a client with custom configuration.
    ///
    /// Useful for testing (point `base_url` at a mock server) or for a
    /// stricter pace.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.bearer_token.trim().is_empty() {
            return Err(TmdbError::InvalidCredential);
        }

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.bearer_token))
            .map_err(|_| TmdbError::InvalidCredential)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            pacer: RequestPacer::new(config.requests_per_second),
        })
    }

    /// Issue a discover query, optionally for one specific page.
    ///
    /// Without a page number upstream returns page 1 along with the
    /// total page count, which is how the page selector learns the range
    /// it may pick from.
    pub async fn discover(
        &self,
        query: &DiscoverQuery,
        page: Option<u32>,
    ) -> Result<DiscoverResponse> {
        let mut path = query.path_and_query();
        if let Some(page) = page {
            path.push_str(&format!("&page={page}"));
        }
        self.get_json(&path).await
    }

    /// Fetch a JSON document from an API path with query string attached.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        self.pacer.acquire().await;

        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound(path_and_query.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TmdbError::RateLimited);
        }
        if !status.is_success() {
            return Err(TmdbError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
