// src/display/format.rs
// =============================================================================
// This module formats feed data for the terminal.
//
// Two helpers live here:
// - classify_language_icon: maps a language name to an icon tag
// - format_display_date / display_date: render timestamps as "Mar 5, 2024"
//
// Both are pure functions, so the rendering layer can be tested without
// touching the rest of the pipeline.
//
// Rust concepts:
// - match: A fixed lookup table as one expression
// - &'static str: String literals live for the whole program
// - Result<T, E>: Parsing can fail, formatting a parsed date cannot
// =============================================================================

use chrono::{DateTime, Utc};

use crate::github::FeedError;

// Shown for languages the table below doesn't know
const DEFAULT_LANGUAGE_ICON: &str = "💻";

// "Mar 5, 2024" - abbreviated month, unpadded day, full year
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

// Picks an icon tag for a language name
//
// The lookup is case-sensitive on purpose: these are GitHub's canonical
// language names ("Rust", not "rust"), and anything else is unknown.
// Total over all inputs - unknown names get the generic default.
pub fn classify_language_icon(language: &str) -> &'static str {
    match language {
        "JavaScript" => "🟨",
        "TypeScript" => "🔷",
        "Python" => "🐍",
        "HTML" => "🌐",
        "CSS" => "🎨",
        "Vue" => "💚",
        "PHP" => "🐘",
        "Java" => "☕",
        "C" => "🔧",
        "C++" => "⚙️",
        "Go" => "🐹",
        "Rust" => "🦀",
        "Ruby" => "💎",
        "Shell" => "🐚",
        "Dockerfile" => "🐳",
        _ => DEFAULT_LANGUAGE_ICON,
    }
}

// Formats a timestamp string as a calendar date
//
// The input must be RFC 3339 (what the GitHub API emits, e.g.
// "2024-03-05T00:00:00Z"); anything unparseable is an InvalidTimestamp.
pub fn format_display_date(timestamp: &str) -> Result<String, FeedError> {
    let date = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|_| FeedError::InvalidTimestamp(timestamp.to_string()))?;

    Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
}

// Same rendering for timestamps the models already parsed
//
// Can't fail: a DateTime is already a valid date.
pub fn display_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
