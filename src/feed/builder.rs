// src/feed/builder.rs
// =============================================================================
// This module turns a raw repository listing into the portfolio feed.
//
// The pipeline, in order:
// 1. Fetch up to 50 repositories for the account (github::GitHubClient)
// 2. Drop private entries, drop forks, re-sort by last push, keep 6
//    (with a fallback to forks when the account has no original work)
// 3. Enrich every kept entry with its language breakdown, all requests
//    in flight at once
// 4. Derive the summary statistics the consumer displays alongside
//
// Step 2 is pure and step 4 is pure; only steps 1 and 3 touch the network.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Generics: The enrichment loop takes its fetch function as a parameter,
//   so tests can inject fakes instead of HTTP calls
// - Iterators: Filtering, sorting and truncating the listing
// =============================================================================

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use futures::future::join_all;

use crate::github::{EnrichedRepo, FeedError, FeedSummary, GitHubClient, Repo};

use super::cache::FeedCache;

/// The feed shows at most this many repositories
pub const MAX_FEED_ENTRIES: usize = 6;

/// Each repository shows at most this many languages
pub const MAX_LANGUAGES: usize = 4;

// A fetched feed stays valid this long before the next load refetches
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// Selects which repositories make it into the feed
//
// Reproduces the selection policy exactly, in order:
// 1. Discard private entries (defensive - the listing endpoint shouldn't
//    return any, but the privacy boundary is enforced here regardless)
// 2. Discard forks, keeping only original work
// 3. Sort by last push, most recent first. The server already sorted by
//    'updated', but that's a different timestamp: editing a description
//    updates a repo without pushing code
// 4. Keep the first 6
// 5. If nothing survived (the account only has forks), repeat over all
//    public entries including forks - a feed of forked work beats an
//    empty portfolio
pub fn select_for_feed(repos: Vec<Repo>) -> Vec<Repo> {
    let public: Vec<Repo> = repos.into_iter().filter(|repo| !repo.is_private).collect();

    let originals: Vec<Repo> = public
        .iter()
        .filter(|repo| !repo.is_fork)
        .cloned()
        .collect();

    let selected = most_recently_pushed(originals);
    if selected.is_empty() {
        // Fallback: no original repos found, show public forks instead
        most_recently_pushed(public)
    } else {
        selected
    }
}

// Sorts by pushed_at descending and keeps the first MAX_FEED_ENTRIES
//
// Repositories that were never pushed (pushed_at is None) sort last.
fn most_recently_pushed(mut repos: Vec<Repo>) -> Vec<Repo> {
    repos.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    repos.truncate(MAX_FEED_ENTRIES);
    repos
}

// Enriches every repository with its language breakdown, concurrently
//
// All language requests are launched at once and joined together, so the
// whole batch takes about as long as the slowest single request. The
// result keeps the input's order and length.
//
// A failure on one repository never fails the batch: that entry falls
// back to its listing-time primary language (or no languages at all) and
// the failure is logged for diagnostics.
pub async fn enrich_with_languages(client: &GitHubClient, repos: Vec<Repo>) -> Vec<EnrichedRepo> {
    enrich_with(repos, |languages_url| {
        let client = client.clone();  // Clone the client for each task
        async move { client.fetch_languages(&languages_url).await }
    })
    .await
}

// The enrichment loop itself, generic over how a breakdown is fetched
//
// Taking the fetch function as a parameter keeps the concurrency and
// fallback behavior testable without a network: tests pass closures that
// succeed or fail on demand.
async fn enrich_with<F, Fut>(repos: Vec<Repo>, fetch: F) -> Vec<EnrichedRepo>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<HashMap<String, u64>, FeedError>>,
{
    let tasks = repos.into_iter().map(|repo| {
        // Create the future now so every request starts together once
        // join_all polls the batch
        let breakdown = fetch(repo.languages_url.clone());
        async move {
            let languages = match breakdown.await {
                Ok(breakdown) => top_languages(breakdown),
                Err(e) => {
                    eprintln!("Warning: Could not fetch languages for {}: {}", repo.name, e);
                    fallback_languages(&repo)
                }
            };
            EnrichedRepo { repo, languages }
        }
    });

    // join_all waits for every task and returns results in input order,
    // no matter which request finishes first
    join_all(tasks).await
}

// Ranks a language -> byte count breakdown for display
//
// Most-used language first, at most MAX_LANGUAGES entries. Ties are broken
// alphabetically so the same breakdown always renders the same way.
fn top_languages(breakdown: HashMap<String, u64>) -> Vec<String> {
    let mut entries: Vec<(String, u64)> = breakdown.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    entries
        .into_iter()
        .take(MAX_LANGUAGES)
        .map(|(language, _bytes)| language)
        .collect()
}

// What an entry shows when its language request failed
//
// The listing already told us the dominant language, so use that; a repo
// with no reported language shows no language tags at all.
fn fallback_languages(repo: &Repo) -> Vec<String> {
    match &repo.language {
        Some(primary) => vec![primary.clone()],
        None => Vec::new(),
    }
}

// Derives the aggregate statistics shown under the feed
//
// Pure arithmetic over the given repositories - no I/O, can't fail, and
// the order of the input doesn't matter.
pub fn derive_summary<'a, I>(repos: I) -> FeedSummary
where
    I: IntoIterator<Item = &'a Repo>,
{
    let mut summary = FeedSummary {
        count: 0,
        total_stars: 0,
        total_forks: 0,
    };

    for repo in repos {
        summary.count += 1;
        summary.total_stars += u64::from(repo.stargazers_count);
        summary.total_forks += u64::from(repo.forks_count);
    }

    summary
}

// The complete pipeline plus a short-lived cache of its last result
//
// This is the type the binary holds for the lifetime of a run: load()
// either returns the cached feed (same username, still fresh) or runs
// listing -> selection -> enrichment and caches what comes out.
#[derive(Debug)]
pub struct PortfolioFeed {
    client: GitHubClient,
    cache: FeedCache,
}

impl PortfolioFeed {
    pub fn new() -> Self {
        Self {
            client: GitHubClient::new(),
            cache: FeedCache::new(CACHE_TTL),
        }
    }

    // Builds (or returns the cached) feed for the given account
    //
    // Listing failures propagate to the caller untouched - no retry, no
    // degraded feed. Enrichment failures never propagate (see
    // enrich_with_languages), so once the listing succeeds the load
    // succeeds.
    pub async fn load(&mut self, username: &str) -> Result<Vec<EnrichedRepo>, FeedError> {
        if let Some(feed) = self.cache.get(username) {
            return Ok(feed);
        }

        let repos = self.client.list_repositories(username).await?;
        let selected = select_for_feed(repos);
        let feed = enrich_with_languages(&self.client, selected).await;

        self.cache.store(username, feed.clone());
        Ok(feed)
    }
}

impl Default for PortfolioFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn timestamp(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    // Builds a repo with just the fields the pipeline cares about
    fn make_repo(
        id: u64,
        pushed: &str,
        is_fork: bool,
        is_private: bool,
        stars: u32,
        forks: u32,
    ) -> Repo {
        Repo {
            id,
            name: format!("repo-{}", id),
            description: None,
            html_url: format!("https://github.com/nexo-here/repo-{}", id),
            homepage: None,
            topics: Vec::new(),
            language: Some("Rust".to_string()),
            languages_url: format!(
                "https://api.github.com/repos/nexo-here/repo-{}/languages",
                id
            ),
            stargazers_count: stars,
            forks_count: forks,
            created_at: timestamp("2023-01-01T00:00:00Z"),
            updated_at: timestamp("2024-06-01T00:00:00Z"),
            pushed_at: Some(timestamp(pushed)),
            is_fork,
            is_private,
        }
    }

    fn ids(repos: &[Repo]) -> Vec<u64> {
        repos.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_select_orders_by_push_date() {
        let repos = vec![
            make_repo(1, "2024-01-01T00:00:00Z", false, false, 5, 1),
            make_repo(2, "2024-03-01T00:00:00Z", false, false, 2, 0),
        ];

        let feed = select_for_feed(repos);
        assert_eq!(ids(&feed), vec![2, 1]);

        let summary = derive_summary(&feed);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_stars, 7);
        assert_eq!(summary.total_forks, 1);
    }

    #[test]
    fn test_select_excludes_forks_and_private() {
        let repos = vec![
            make_repo(1, "2024-05-01T00:00:00Z", true, false, 0, 0),
            make_repo(2, "2024-04-01T00:00:00Z", false, true, 0, 0),
            make_repo(3, "2024-03-01T00:00:00Z", false, false, 0, 0),
        ];

        let feed = select_for_feed(repos);
        assert_eq!(ids(&feed), vec![3]);
    }

    #[test]
    fn test_select_truncates_to_six() {
        let repos: Vec<Repo> = (1..=9)
            .map(|i| {
                let pushed = format!("2024-01-0{}T00:00:00Z", i);
                make_repo(i, &pushed, false, false, 0, 0)
            })
            .collect();

        let feed = select_for_feed(repos);
        assert_eq!(feed.len(), MAX_FEED_ENTRIES);
        // Strictly most-recent-first: the latest push dates win
        assert_eq!(ids(&feed), vec![9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_select_falls_back_to_forks() {
        // An account with only forked work still gets a feed
        let repos = vec![
            make_repo(1, "2024-01-01T00:00:00Z", true, false, 0, 0),
            make_repo(2, "2024-02-01T00:00:00Z", true, false, 0, 0),
        ];

        let feed = select_for_feed(repos);
        assert_eq!(ids(&feed), vec![2, 1]);
        assert!(feed.iter().all(|r| r.is_fork));
    }

    #[test]
    fn test_select_never_falls_back_to_private() {
        let repos = vec![
            make_repo(1, "2024-01-01T00:00:00Z", true, false, 0, 0),
            make_repo(2, "2024-02-01T00:00:00Z", false, true, 0, 0),
        ];

        let feed = select_for_feed(repos);
        assert_eq!(ids(&feed), vec![1]);
    }

    #[test]
    fn test_select_empty_listing() {
        let feed = select_for_feed(Vec::new());
        assert!(feed.is_empty());
    }

    #[test]
    fn test_never_pushed_sorts_last() {
        let mut never_pushed = make_repo(1, "2024-01-01T00:00:00Z", false, false, 0, 0);
        never_pushed.pushed_at = None;
        let repos = vec![
            never_pushed,
            make_repo(2, "2023-01-01T00:00:00Z", false, false, 0, 0),
        ];

        let feed = select_for_feed(repos);
        assert_eq!(ids(&feed), vec![2, 1]);
    }

    #[test]
    fn test_summary_is_order_independent() {
        let a = make_repo(1, "2024-01-01T00:00:00Z", false, false, 10, 4);
        let b = make_repo(2, "2024-02-01T00:00:00Z", false, false, 7, 0);
        let c = make_repo(3, "2024-03-01T00:00:00Z", false, false, 0, 2);

        let forward = derive_summary([&a, &b, &c]);
        let backward = derive_summary([&c, &a, &b]);

        assert_eq!(forward, backward);
        assert_eq!(forward.count, 3);
        assert_eq!(forward.total_stars, 17);
        assert_eq!(forward.total_forks, 6);
    }

    #[test]
    fn test_top_languages_ranks_by_bytes() {
        let breakdown = HashMap::from([
            ("TypeScript".to_string(), 90_000_u64),
            ("CSS".to_string(), 5_000),
            ("HTML".to_string(), 2_000),
            ("JavaScript".to_string(), 40_000),
            ("Shell".to_string(), 100),
        ]);

        let languages = top_languages(breakdown);
        // Five languages in, four out, biggest first
        assert_eq!(languages, vec!["TypeScript", "JavaScript", "CSS", "HTML"]);
    }

    #[test]
    fn test_top_languages_breaks_ties_alphabetically() {
        let breakdown = HashMap::from([
            ("Zig".to_string(), 500_u64),
            ("Ada".to_string(), 500),
        ]);

        let languages = top_languages(breakdown);
        assert_eq!(languages, vec!["Ada", "Zig"]);
    }

    #[tokio::test]
    async fn test_enrich_isolates_failures() {
        // repo-1's language request fails, repo-2's succeeds; the batch
        // must still come back whole and in order
        let failing = make_repo(1, "2024-01-01T00:00:00Z", false, false, 0, 0);
        let healthy = make_repo(2, "2024-02-01T00:00:00Z", false, false, 0, 0);

        let enriched = enrich_with(vec![failing, healthy], |url| async move {
            if url.contains("repo-1") {
                Err(FeedError::Network("connection failed".to_string()))
            } else {
                Ok(HashMap::from([
                    ("Rust".to_string(), 9_000_u64),
                    ("TOML".to_string(), 300),
                ]))
            }
        })
        .await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].repo.id, 1);
        assert_eq!(enriched[1].repo.id, 2);
        // The failed entry falls back to its listing-time primary language
        assert_eq!(enriched[0].languages, vec!["Rust"]);
        assert_eq!(enriched[1].languages, vec!["Rust", "TOML"]);
    }

    #[tokio::test]
    async fn test_enrich_fallback_without_primary_language() {
        let mut repo = make_repo(1, "2024-01-01T00:00:00Z", false, false, 0, 0);
        repo.language = None;

        let enriched = enrich_with(vec![repo], |_url| async {
            Err(FeedError::RateLimited)
        })
        .await;

        assert_eq!(enriched.len(), 1);
        assert!(enriched[0].languages.is_empty());
    }

    #[tokio::test]
    async fn test_enrich_preserves_order_on_empty_input() {
        let enriched = enrich_with(Vec::new(), |_url| async {
            Ok(HashMap::new())
        })
        .await;
        assert!(enriched.is_empty());
    }
}
