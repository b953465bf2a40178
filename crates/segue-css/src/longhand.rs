//! The four `transition-*` longhand parsers.
//!
//! Each longhand is a comma-separated list that lines up positionally with
//! the others (`transition-property: opacity, width` pairs with
//! `transition-duration: 0.3s, 1s`). The parsers preserve positions, so
//! empty segments stay in the output as default values; zipping the lists
//! into declarations is the caller's job.

use crate::shorthand::{parse_duration, parse_timing_function, split_top_level_commas};
use crate::types::TimingCurve;

/// Parse `transition-property`.
///
/// Property names are lowercased. `"none"` yields an empty list; `"all"` is
/// passed through as a literal property name for the caller to expand.
pub fn parse_property_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    split_top_level_commas(trimmed)
        .into_iter()
        .map(|segment| segment.to_ascii_lowercase())
        .collect()
}

/// Parse `transition-duration` into seconds per entry.
pub fn parse_duration_list(text: &str) -> Vec<f32> {
    split_top_level_commas(text.trim())
        .into_iter()
        .map(parse_duration)
        .collect()
}

/// Parse `transition-timing-function`.
///
/// Unrecognized entries (including `cubic-bezier(...)`) fall back to
/// `ease-in-out`, matching [`parse_timing_function`].
pub fn parse_timing_function_list(text: &str) -> Vec<TimingCurve> {
    split_top_level_commas(text.trim())
        .into_iter()
        .map(parse_timing_function)
        .collect()
}

/// Parse `transition-delay` into seconds per entry.
///
/// Delays share the duration syntax, including the unparsable-to-zero rule.
pub fn parse_delay_list(text: &str) -> Vec<f32> {
    parse_duration_list(text)
}
