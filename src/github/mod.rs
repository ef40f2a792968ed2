// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - models: serde structs mirroring the API's repository payloads
// - client: the HTTP client wrapper for the two endpoints we call
// - error: the typed error taxonomy for the whole pipeline
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod client;
mod error;
mod models;

// Re-export public items from submodules
// This lets users write `github::GitHubClient` instead of
// `github::client::GitHubClient`
pub use client::{GitHubClient, DEFAULT_USERNAME, GITHUB_API_BASE};
pub use error::FeedError;
pub use models::{EnrichedRepo, FeedSummary, Repo};
