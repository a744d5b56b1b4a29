//! Read-only client for the todo resource behind the live-coding slide.
//!
//! One request shape only: `GET {base}/todos/{id}` with default headers and
//! no authentication. Every failure (transport, status, decode) surfaces as a
//! [`FetchError`]; callers that only care whether the read worked can treat
//! all variants alike.

use std::time::Duration;

use lecture_types::{ResourceKey, Todo};
use thiserror::Error;
use url::Url;

/// Public JSON Placeholder endpoint used in the lecture.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid resource url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("response is not a todo: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct TodoClient {
    http: reqwest::Client,
    base: Url,
}

impl TodoClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(http, base))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, base: Url) -> Self {
        Self {
            http,
            base: with_trailing_slash(base),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn todo_url(&self, key: ResourceKey) -> Result<Url, FetchError> {
        Ok(self.base.join(&format!("todos/{key}"))?)
    }

    pub async fn fetch_todo(&self, key: ResourceKey) -> Result<Todo, FetchError> {
        let url = self.todo_url(key)?;
        tracing::debug!(%url, "Fetching todo");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        let todo = serde_json::from_slice(&body)?;
        Ok(todo)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
