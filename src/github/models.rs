// src/github/models.rs
// =============================================================================
// This module defines the data model for the feed.
//
// The structs mirror the GitHub REST API's repository listing payload:
// - Field names match the API's JSON keys so serde can map them directly
// - Where the Rust name should read differently (is_fork vs fork) we use
//   #[serde(rename)] instead of renaming the wire format
// - Nullable API fields become Option<T>
//
// Rust concepts:
// - Derive macros: Serialize/Deserialize generated by serde
// - Option<T>: For fields the API may report as null
// - Struct composition: EnrichedRepo wraps a Repo plus derived data
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One public repository, as listed by GET /users/{username}/repos
//
// Only the fields the feed actually uses are declared; serde ignores the
// rest of the payload by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// Opaque numeric identifier assigned by GitHub
    pub id: u64,
    /// Display name of the repository
    pub name: String,
    /// Free-text summary (null for repos with no description)
    pub description: Option<String>,
    /// Canonical web URL of the repository
    pub html_url: String,
    /// URL of a live deployment, if the owner configured one
    pub homepage: Option<String>,
    /// Free-text labels; the API omits the key in some responses
    #[serde(default)]
    pub topics: Vec<String>,
    /// Dominant language as reported at listing time (null for empty repos)
    pub language: Option<String>,
    /// Endpoint returning this repo's language -> byte count breakdown
    pub languages_url: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// When code was last pushed - null for repositories that never were
    ///
    /// Distinct from updated_at: editing the description bumps updated_at
    /// without pushing anything, so the feed sorts on this field instead.
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(rename = "fork")]
    pub is_fork: bool,
    #[serde(rename = "private")]
    pub is_private: bool,
}

// A repository plus its language breakdown, ready for display
//
// #[serde(flatten)] merges the Repo fields into this struct's JSON output,
// so --json consumers see one flat object per repository.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRepo {
    #[serde(flatten)]
    pub repo: Repo,
    /// Languages by descending byte count, at most four
    pub languages: Vec<String>,
}

// Aggregate statistics over a feed
//
// Recomputed from the feed whenever it changes; never stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    /// How many repositories made it into the feed
    pub count: usize,
    /// Sum of stargazer counts across the feed
    pub total_stars: u64,
    /// Sum of fork counts across the feed
    pub total_forks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_entry() {
        let json = r#"{
            "id": 123456789,
            "name": "portfolio",
            "description": "My personal site",
            "html_url": "https://github.com/nexo-here/portfolio",
            "homepage": "https://nexo.dev",
            "topics": ["react", "portfolio"],
            "language": "TypeScript",
            "languages_url": "https://api.github.com/repos/nexo-here/portfolio/languages",
            "stargazers_count": 12,
            "forks_count": 3,
            "created_at": "2023-06-01T10:00:00Z",
            "updated_at": "2024-03-10T08:30:00Z",
            "pushed_at": "2024-03-05T00:00:00Z",
            "fork": false,
            "private": false
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 123456789);
        assert_eq!(repo.name, "portfolio");
        assert_eq!(repo.language.as_deref(), Some("TypeScript"));
        assert!(!repo.is_fork);
        assert!(!repo.is_private);
        assert_eq!(repo.topics.len(), 2);
    }

    #[test]
    fn test_deserialize_tolerates_nulls_and_missing_topics() {
        // Empty repos report null for description, homepage, language and
        // pushed_at, and older cached responses omit topics entirely
        let json = r#"{
            "id": 1,
            "name": "empty-repo",
            "description": null,
            "html_url": "https://github.com/nexo-here/empty-repo",
            "homepage": null,
            "language": null,
            "languages_url": "https://api.github.com/repos/nexo-here/empty-repo/languages",
            "stargazers_count": 0,
            "forks_count": 0,
            "created_at": "2023-06-01T10:00:00Z",
            "updated_at": "2023-06-01T10:00:00Z",
            "pushed_at": null,
            "fork": false,
            "private": false
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert!(repo.description.is_none());
        assert!(repo.pushed_at.is_none());
        assert!(repo.topics.is_empty());
    }

    #[test]
    fn test_enriched_repo_serializes_flat() {
        let json = r#"{
            "id": 1,
            "name": "portfolio",
            "description": null,
            "html_url": "https://github.com/nexo-here/portfolio",
            "homepage": null,
            "language": "TypeScript",
            "languages_url": "https://api.github.com/repos/nexo-here/portfolio/languages",
            "stargazers_count": 5,
            "forks_count": 1,
            "created_at": "2023-06-01T10:00:00Z",
            "updated_at": "2024-03-10T08:30:00Z",
            "pushed_at": "2024-03-05T00:00:00Z",
            "fork": false,
            "private": false
        }"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        let enriched = EnrichedRepo {
            repo,
            languages: vec!["TypeScript".to_string(), "CSS".to_string()],
        };

        let value = serde_json::to_value(&enriched).unwrap();
        // flatten puts repo fields and languages at the same level
        assert_eq!(value["name"], "portfolio");
        assert_eq!(value["languages"][0], "TypeScript");
    }
}
