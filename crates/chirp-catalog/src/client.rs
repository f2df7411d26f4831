//! HTTP client for the catalog provider.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::Movie;

/// Default bound on a single provider request.  The provider offers no
/// latency guarantee, and an unbounded hang would stall the operation
/// that triggered the fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin adapter over the provider's two read endpoints.
///
/// Each call is a single attempt: no retries, no caching.  Failures
/// surface to the caller as [`CatalogError`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the provider rooted at `base_url`, bounding
    /// every request by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch the full movie list.
    ///
    /// Unwraps the provider's `data.movies` envelope; a response
    /// without it is malformed, even when the HTTP status is a success.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let url = format!("{}/list_movies.json", self.base_url);
        let body = self.fetch_json(&url, &[]).await?;

        let movies = body
            .get("data")
            .and_then(|data| data.get("movies"))
            .cloned()
            .ok_or(CatalogError::MalformedEnvelope("missing data.movies"))?;

        let movies: Vec<Movie> = serde_json::from_value(movies)?;
        debug!(count = movies.len(), "Fetched movie list");
        Ok(movies)
    }

    /// Fetch a single movie by provider id.
    ///
    /// Returns `Ok(None)` when the envelope is well-formed but reports
    /// no match.  The provider signals an unknown id either with a
    /// missing/null `movie` member or with a zeroed placeholder record.
    pub async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        let url = format!("{}/movie_details.json", self.base_url);
        let body = self.fetch_json(&url, &[("movie_id", id)]).await?;

        let data = body
            .get("data")
            .ok_or(CatalogError::MalformedEnvelope("missing data"))?;

        let movie = match data.get("movie") {
            None | Some(Value::Null) => {
                debug!(%id, "Catalog has no such movie");
                return Ok(None);
            }
            Some(movie) => movie.clone(),
        };

        if movie.get("id").and_then(Value::as_i64) == Some(0) {
            debug!(%id, "Catalog answered with the unknown-id placeholder");
            return Ok(None);
        }

        let movie: Movie = serde_json::from_value(movie)?;
        Ok(Some(movie))
    }

    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let resp = self.http.get(url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        Ok(resp.json::<Value>().await?)
    }
}
