//! CSS `transition` shorthand parsing.
//!
//! A shorthand is a comma-separated list of per-property specs. Each spec is
//! a run of whitespace-separated tokens classified by shape rather than
//! position, the way browsers do:
//!
//! - a token ending in `s` or `ms` is a duration; the first one seen is the
//!   duration, the second the delay
//! - a token matching a timing keyword (or starting with `cubic-bezier`) is
//!   the timing function
//! - any other token names the property, if one has not been seen yet
//!
//! Splitting is parenthesis-aware so a `cubic-bezier(.17, .67, .83, .67)`
//! token survives its internal commas and spaces.

use crate::types::{TimingCurve, TransitionDeclaration};

/// Parse a `transition` shorthand into normalized declarations.
///
/// `"none"` (or an empty string) yields an empty list. Declarations that
/// never name a property are dropped. Omitted tokens take their CSS
/// defaults: duration `0`, timing `ease`, delay `0`.
pub fn parse_shorthand(text: &str) -> Vec<TransitionDeclaration> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    let mut declarations = Vec::new();
    for segment in split_top_level_commas(trimmed) {
        match parse_declaration(segment) {
            Some(declaration) => declarations.push(declaration),
            None => {
                tracing::debug!(segment = %segment, "dropped transition declaration without property");
            }
        }
    }
    declarations
}

/// Parse a CSS duration value into seconds.
///
/// Accepts `300ms`, `0.3s`, and bare numbers (seconds). Unparsable text
/// yields `0`; negative durations clamp to `0`.
pub fn parse_duration(text: &str) -> f32 {
    let lower = text.trim().to_ascii_lowercase();
    let parsed = if let Some(stripped) = lower.strip_suffix("ms") {
        stripped.trim().parse::<f32>().map(|v| v / 1000.0)
    } else if let Some(stripped) = lower.strip_suffix('s') {
        stripped.trim().parse::<f32>()
    } else {
        lower.parse::<f32>()
    };
    parsed.map(|v| v.max(0.0)).unwrap_or(0.0)
}

/// Parse a CSS timing-function value.
///
/// Only the five curve keywords are recognized. Anything else, including
/// `cubic-bezier(...)` syntax, falls back to `ease-in-out` rather than
/// failing; bezier precision is not modeled.
pub fn parse_timing_function(text: &str) -> TimingCurve {
    TimingCurve::from_keyword(text).unwrap_or(TimingCurve::EaseInOut)
}

fn parse_declaration(segment: &str) -> Option<TransitionDeclaration> {
    let mut property: Option<String> = None;
    let mut duration: Option<f32> = None;
    let mut delay: Option<f32> = None;
    let mut timing: Option<TimingCurve> = None;

    for token in split_preserving_parens(segment) {
        let lower = token.to_ascii_lowercase();
        if lower.ends_with("ms") || lower.ends_with('s') {
            // First time token is the duration, the second the delay.
            let seconds = parse_duration(&lower);
            if duration.is_none() {
                duration = Some(seconds);
            } else if delay.is_none() {
                delay = Some(seconds);
            }
            continue;
        }
        if TimingCurve::from_keyword(&lower).is_some() || lower.starts_with("cubic-bezier") {
            if timing.is_none() {
                timing = Some(parse_timing_function(&lower));
            }
            continue;
        }
        if property.is_none() {
            property = Some(lower);
        }
    }

    property.map(|property| TransitionDeclaration {
        property,
        duration: duration.unwrap_or(0.0),
        timing: timing.unwrap_or_default(),
        delay: delay.unwrap_or(0.0),
    })
}

/// Split on commas at parenthesis depth zero.
pub(crate) fn split_top_level_commas(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                segments.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(text[start..].trim());
    segments
}

/// Split on whitespace at parenthesis depth zero, keeping function-call
/// tokens like `cubic-bezier(.17, .67, .83, .67)` intact.
fn split_preserving_parens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    for ch in text.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.trim().is_empty() {
                    tokens.push(current.trim().to_string());
                    current.clear();
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        tokens.push(current.trim().to_string());
    }
    tokens
}
