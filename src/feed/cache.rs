// src/feed/cache.rs
// =============================================================================
// This module holds the most recent successful feed for a little while.
//
// Why cache at all?
// - Unauthenticated GitHub API requests come out of a small hourly quota
// - Two commands in quick succession shouldn't pay for two full fetches
//
// The cache is deliberately tiny: one slot, one writer (the feed builder),
// a TTL measured in minutes, and nothing ever written to disk. Reads hand
// out clones so the cached copy can't be mutated from outside.
//
// Rust concepts:
// - std::time::Instant: Monotonic clock for measuring age
// - Option<T>: The slot is empty until the first successful load
// - Ownership: get() clones rather than lending out the stored feed
// =============================================================================

use std::time::{Duration, Instant};

use crate::github::EnrichedRepo;

// A single-slot, time-limited memo of the last feed built
//
// Keyed by username: asking for a different account is always a miss.
#[derive(Debug)]
pub struct FeedCache {
    ttl: Duration,
    slot: Option<CachedFeed>,
}

#[derive(Debug)]
struct CachedFeed {
    username: String,
    stored_at: Instant,
    feed: Vec<EnrichedRepo>,
}

impl FeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    // Returns a copy of the cached feed if it matches and is still fresh
    pub fn get(&self, username: &str) -> Option<Vec<EnrichedRepo>> {
        let cached = self.slot.as_ref()?;

        if cached.username != username {
            return None;
        }
        if cached.stored_at.elapsed() >= self.ttl {
            return None;  // Expired - the next load refetches
        }

        Some(cached.feed.clone())
    }

    // Replaces whatever was cached with a freshly built feed
    pub fn store(&mut self, username: &str, feed: Vec<EnrichedRepo>) {
        self.slot = Some(CachedFeed {
            username: username.to_string(),
            stored_at: Instant::now(),
            feed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_misses() {
        let cache = FeedCache::new(Duration::from_secs(300));
        assert!(cache.get("nexo-here").is_none());
    }

    #[test]
    fn test_store_then_get() {
        let mut cache = FeedCache::new(Duration::from_secs(300));
        cache.store("nexo-here", Vec::new());

        // Fresh and matching: hit (even an empty feed is a valid feed)
        assert!(cache.get("nexo-here").is_some());
    }

    #[test]
    fn test_different_username_misses() {
        let mut cache = FeedCache::new(Duration::from_secs(300));
        cache.store("nexo-here", Vec::new());

        assert!(cache.get("someone-else").is_none());
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut cache = FeedCache::new(Duration::from_secs(0));
        cache.store("nexo-here", Vec::new());

        assert!(cache.get("nexo-here").is_none());
    }
}
