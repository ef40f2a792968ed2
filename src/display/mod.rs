// src/display/mod.rs
// =============================================================================
// This module contains presentation helpers.
//
// Everything here is pure: icon classification and date formatting take
// values in and hand strings back, so the rest of the application decides
// where the output actually goes.
// =============================================================================

mod format;

// Re-export the formatting helpers
pub use format::{classify_language_icon, display_date, format_display_date};
