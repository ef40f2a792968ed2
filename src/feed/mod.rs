// src/feed/mod.rs
// =============================================================================
// This module contains the feed-building pipeline.
//
// Submodules:
// - builder: selection, enrichment, summary derivation, and the
//   PortfolioFeed type that strings them together
// - cache: short-lived memo of the last successful feed
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod builder;
mod cache;

// Re-export public items from submodules
// This lets users write `feed::PortfolioFeed` instead of
// `feed::builder::PortfolioFeed`
pub use builder::{
    derive_summary, enrich_with_languages, select_for_feed, PortfolioFeed, MAX_FEED_ENTRIES,
    MAX_LANGUAGES,
};
pub use cache::FeedCache;
