//! Declaration types produced by the transition parser.
//!
//! These are serialization-focused types: the parser normalizes raw CSS text
//! into them, and the runtime converts them into its own driver state.

use serde::{Deserialize, Serialize};

/// Easing keyword for a transition.
///
/// The runtime maps each keyword onto a (curve shape, direction) pair when
/// it evaluates progress; this type only names the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingCurve {
    /// Linear interpolation (no easing).
    Linear,
    /// CSS `ease` - Slow start, fast middle, slow end.
    Ease,
    /// CSS `ease-in` - Slow start, accelerating.
    EaseIn,
    /// CSS `ease-out` - Fast start, decelerating.
    EaseOut,
    /// CSS `ease-in-out` - Slow start and end, fast middle.
    EaseInOut,
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::Ease
    }
}

impl TimingCurve {
    /// Look up a curve by its CSS keyword.
    ///
    /// Matching is exact (after ASCII lowercasing). Returns `None` for
    /// anything that is not one of the five supported keywords, including
    /// `cubic-bezier(...)` syntax.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    /// The CSS keyword for this curve.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// One normalized transition declaration.
///
/// Corresponds to a single comma-separated entry of a CSS `transition`
/// shorthand, e.g. `opacity 0.3s ease-in-out 0.1s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDeclaration {
    /// The style property this declaration animates.
    pub property: String,
    /// Duration of the transition in seconds.
    pub duration: f32,
    /// Easing keyword for the transition timing.
    #[serde(default)]
    pub timing: TimingCurve,
    /// Delay before the transition starts, in seconds.
    #[serde(default)]
    pub delay: f32,
}

impl TransitionDeclaration {
    /// Create a declaration with default timing (`ease`) and no delay.
    pub fn new(property: impl Into<String>, duration: f32) -> Self {
        Self {
            property: property.into(),
            duration,
            timing: TimingCurve::default(),
            delay: 0.0,
        }
    }

    /// Set the easing keyword for this declaration.
    pub fn with_timing(mut self, timing: TimingCurve) -> Self {
        self.timing = timing;
        self
    }

    /// Set the delay for this declaration.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}
