// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two endpoints are involved:
// - GET /users/{username}/repos?sort=updated&per_page=50 - the listing
// - The per-repository languages_url from the listing - the breakdown
//
// Error mapping (same for both endpoints):
// - HTTP 403            -> FeedError::RateLimited (unauthenticated quota)
// - other non-2xx       -> FeedError::Upstream with the status preserved
// - transport failure   -> FeedError::Network with a categorized description
//
// No retries, no backoff: failures surface to the caller unchanged and the
// consuming layer decides what to show.
//
// Rust concepts:
// - async functions: For network I/O
// - Result<T, E>: For error handling with a typed error
// - Clone: reqwest's Client is a cheap handle around a shared pool
// =============================================================================

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::error::FeedError;
use super::models::Repo;

/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// The account the portfolio belongs to, used when no username is given
pub const DEFAULT_USERNAME: &str = "nexo-here";

// One page of 50 is plenty: the feed keeps at most 6 entries
const REPOS_PER_PAGE: u32 = 50;

// A thin wrapper around reqwest's Client, preconfigured for the GitHub API
//
// Cloning is cheap (the inner client is reference counted), which matters
// because each concurrent enrichment task gets its own handle.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    // Creates a client with reasonable settings
    //
    // The User-Agent matters: the GitHub API rejects requests that don't
    // send one, even unauthenticated ones.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))  // 10 second timeout per request
            .user_agent(concat!("portfolio-feed/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
        }
    }

    // Fetches up to one page of the account's public repositories
    //
    // The server sorts by 'updated', but the feed builder re-sorts by
    // 'pushed' afterwards - the two timestamps differ whenever metadata
    // changes without a code push.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repo>, FeedError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, REPOS_PER_PAGE
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(categorize_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_failure_status(status));
        }

        response
            .json::<Vec<Repo>>()
            .await
            .map_err(|e| FeedError::Network(format!("invalid response body: {}", e)))
    }

    // Fetches the language -> byte count breakdown for one repository
    //
    // The URL comes straight from the listing payload (languages_url),
    // so there's nothing to construct here.
    pub async fn fetch_languages(
        &self,
        languages_url: &str,
    ) -> Result<HashMap<String, u64>, FeedError> {
        let response = self
            .client
            .get(languages_url)
            .send()
            .await
            .map_err(categorize_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_failure_status(status));
        }

        response
            .json::<HashMap<String, u64>>()
            .await
            .map_err(|e| FeedError::Network(format!("invalid response body: {}", e)))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

// Maps a non-success HTTP status onto the error taxonomy
//
// 403 is how the API signals an exhausted unauthenticated quota, so it gets
// its own variant; everything else keeps its status code and reason text.
fn map_failure_status(status: StatusCode) -> FeedError {
    if status == StatusCode::FORBIDDEN {
        FeedError::RateLimited
    } else {
        FeedError::Upstream {
            status: status.as_u16(),
            text: status.canonical_reason().unwrap_or("").to_string(),
        }
    }
}

// Categorizes different transport-level error types from reqwest
//
// The request never got an HTTP response here, so all of these become
// FeedError::Network - the description just helps diagnostics.
fn categorize_transport_error(error: reqwest::Error) -> FeedError {
    let error_string = error.to_string();

    let detail = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else {
        error_string
    };

    FeedError::Network(detail)
}
