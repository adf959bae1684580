//! # quad-client
//!
//! HTTP client for the course search backend.
//!
//! One class of request: `POST {base}/search` with a JSON body of
//! `{"query", "school"}` (plus an optional `limit`), answered by either a
//! bare JSON array of course rows or `{"results": [...]}`. Rows are
//! opaque to this crate; only the envelope is validated. A `/healthz`
//! probe rides along for deploy checks.
//!
//! The client makes exactly one attempt per call — no retries, no
//! cancellation. Overlapping searches are not sequenced here; callers that
//! allow them must discard stale responses themselves.

mod error;
mod http;

pub use error::SearchError;

use serde::Serialize;

use quad_core::CourseRow;

/// Body of a `POST /search` request.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    school: &'a str,
    /// Maximum result count; the backend defaults to 10 and clamps to
    /// 1..=50, so it is simply omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// HTTP client bound to one search backend.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the backend at `base_url`. Trailing slashes are
    /// stripped so path joining stays predictable.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("quad/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for courses matching `query`, filtered to `school` (the
    /// `ALL` sentinel means no filter, resolved by the backend).
    ///
    /// A query that trims to empty, or an empty school, is a valid
    /// "no search" case: it returns an empty row list without touching
    /// the network.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the backend
    /// returns a non-success status, or the response envelope is not a
    /// row array.
    pub async fn search(&self, query: &str, school: &str) -> Result<Vec<CourseRow>, SearchError> {
        self.search_with_limit(query, school, None).await
    }

    /// [`search`](Self::search) with an explicit result limit.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub async fn search_with_limit(
        &self,
        query: &str,
        school: &str,
        limit: Option<u32>,
    ) -> Result<Vec<CourseRow>, SearchError> {
        let trimmed = query.trim();
        if trimmed.is_empty() || school.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.base_url);
        tracing::debug!(query = trimmed, school, ?limit, %url, "sending search request");
        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SearchRequest {
                query: trimmed,
                school,
                limit,
            })
            .send()
            .await?;
        http::read_rows(resp).await
    }

    /// Probe the backend's `/healthz` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails or the backend answers
    /// with a non-success status.
    pub async fn health(&self) -> Result<(), SearchError> {
        let url = format!("{}/healthz", self.base_url);
        let resp = self.http.get(&url).send().await?;
        http::check_status(resp).await
    }
}
