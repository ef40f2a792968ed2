// src/github/error.rs
// =============================================================================
// This module defines the error taxonomy for the feed pipeline.
//
// Why a dedicated enum instead of anyhow everywhere?
// - The consumer needs to distinguish "rate limited" from "server error"
//   (they render differently: "try again later" vs "something broke")
// - Each variant carries exactly the detail its failure mode produces
// - anyhow still wraps this at the binary boundary via the Error impl
//
// Rust concepts:
// - Enums with data: Variants that carry extra information
// - Trait implementations: Display and std::error::Error by hand
// - The ? operator: Works with any type implementing std::error::Error
// =============================================================================

use std::fmt;

// Every way the feed pipeline can fail
//
// The first three come from talking to the GitHub API; the last one comes
// from the date formatting helper when it's handed something unparseable.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The API answered 403: the unauthenticated request quota is exhausted
    RateLimited,
    /// The API answered with any other non-success status
    Upstream { status: u16, text: String },
    /// The request never produced a response (DNS, timeout, connection reset)
    Network(String),
    /// A timestamp string could not be parsed as a date
    InvalidTimestamp(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::RateLimited => {
                write!(f, "GitHub API rate limit exceeded. Please try again later.")
            }
            FeedError::Upstream { status, text } => {
                write!(f, "GitHub API error: {} {}", status, text)
            }
            FeedError::Network(detail) => {
                write!(f, "Network error: {}", detail)
            }
            FeedError::InvalidTimestamp(input) => {
                write!(f, "Invalid timestamp: {}", input)
            }
        }
    }
}

// Implementing std::error::Error makes FeedError work with the ? operator
// in functions that return anyhow::Result (our main.rs does exactly that)
impl std::error::Error for FeedError {}
