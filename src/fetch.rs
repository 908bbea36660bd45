// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-time download of the documentation source text.
//!
//! The whole system serves exactly one remote file, fetched once at startup.
//! Transient failures are retried a fixed number of times with a fixed delay;
//! when every attempt fails the process has nothing to serve and startup must
//! abort. This module owns those bounds — the segmenter and scorer never see
//! a network.

use crate::error::FetchError;
use std::time::Duration;
use tracing::{debug, warn};

/// Where the flat-text Svelte documentation lives.
pub const DEFAULT_DOCS_URL: &str = "https://svelte.dev/llms-full.txt";

/// Environment variable overriding the documentation URL.
pub const DOCS_URL_ENV: &str = "SVELDOC_DOCS_URL";

/// Per-attempt timeout.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay between attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Total attempts before giving up.
const MAX_ATTEMPTS: u32 = 3;

/// Fetches the documentation text with bounded retry.
///
/// One pooled client per fetcher; the per-attempt timeout lives on the
/// client so every retry gets the same budget.
pub struct DocsFetcher {
    client: reqwest::Client,
    url: String,
}

impl DocsFetcher {
    /// Build a fetcher for `url`, validating the URL up front.
    ///
    /// Only http and https schemes are accepted.
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let parsed =
            url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}' (only http/https allowed)",
                parsed.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("sveldoc/", env!("CARGO_PKG_VERSION")))
            .timeout(ATTEMPT_TIMEOUT)
            .build()
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        Ok(DocsFetcher {
            client,
            url: url.to_string(),
        })
    }

    /// Resolve the documentation URL: explicit flag, then the
    /// `SVELDOC_DOCS_URL` environment variable, then the default.
    pub fn resolve_url(flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        std::env::var(DOCS_URL_ENV).unwrap_or_else(|_| DEFAULT_DOCS_URL.to_string())
    }

    /// The URL this fetcher targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the document, retrying up to the attempt bound.
    ///
    /// Returns the body text on the first successful attempt. Every failed
    /// attempt is logged at `warn`; exhaustion carries the last error.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            debug!(url = %self.url, attempt, "fetching documentation");
            match self.fetch_once().await {
                Ok(text) => {
                    debug!(bytes = text.len(), "documentation fetched");
                    return Ok(text);
                }
                Err(FetchError::RequestFailed(message)) => {
                    warn!(
                        url = %self.url,
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        error = %message,
                        "documentation fetch attempt failed"
                    );
                    last_error = message;
                }
                Err(other) => return Err(other),
            }
            if attempt < MAX_ATTEMPTS {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }

        Err(FetchError::Exhausted {
            attempts: MAX_ATTEMPTS,
            last_error,
        })
    }

    async fn fetch_once(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed(format!(
                "unexpected HTTP status {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(format!("failed to read body: {}", e)))
    }
}
