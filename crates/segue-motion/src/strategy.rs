//! Property strategies: how each CSS property animates.
//!
//! Every transitioned property resolves to a [`Strategy`] through the
//! [`StrategyRegistry`]. The registry ships with the standard visual
//! properties pre-registered and hosts can register additional ones, so
//! support for a new property is a registration rather than a code change
//! in the engine. Unregistered properties fall back to [`Strategy::Snap`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which paint of a node a color transition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintRole {
    /// Background fill.
    Fill,
    /// Foreground text.
    Text,
    /// Border stroke.
    Border,
}

/// Which layout axis a size transition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeAxis {
    Width,
    Height,
}

/// How a property's value is interpolated and written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// Lerp the node's opacity, clamped to 0.0..=1.0.
    Alpha,
    /// Lerp the RGBA color of one of the node's paints.
    Color { role: PaintRole },
    /// Lerp a layout dimension, truncated to whole units on write.
    Size { axis: SizeAxis },
    /// Lerp a generic numeric attribute.
    ///
    /// Not registered by default; hosts register it for custom numeric
    /// properties.
    Scalar,
    /// No interpolation. The target value is written once when the active
    /// phase begins.
    Snap,
}

/// Maps property names to their animation strategies.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Strategy>,
}

impl StrategyRegistry {
    /// Create a registry with no registrations. Every lookup snaps.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Create a registry with the standard visual properties registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("opacity", Strategy::Alpha);
        registry.register(
            "background-color",
            Strategy::Color {
                role: PaintRole::Fill,
            },
        );
        registry.register(
            "background",
            Strategy::Color {
                role: PaintRole::Fill,
            },
        );
        registry.register(
            "color",
            Strategy::Color {
                role: PaintRole::Text,
            },
        );
        registry.register(
            "border-color",
            Strategy::Color {
                role: PaintRole::Border,
            },
        );
        registry.register(
            "width",
            Strategy::Size {
                axis: SizeAxis::Width,
            },
        );
        registry.register(
            "height",
            Strategy::Size {
                axis: SizeAxis::Height,
            },
        );
        registry
    }

    /// Register a strategy for a property name, replacing any existing one.
    pub fn register(&mut self, property: impl Into<String>, strategy: Strategy) {
        self.strategies.insert(property.into(), strategy);
    }

    /// Look up the strategy for a property.
    ///
    /// Unregistered properties snap to their target value.
    pub fn lookup(&self, property: &str) -> Strategy {
        self.strategies
            .get(property)
            .copied()
            .unwrap_or(Strategy::Snap)
    }

    /// Check whether a property has an explicit registration.
    pub fn is_registered(&self, property: &str) -> bool {
        self.strategies.contains_key(property)
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if the registry has no registrations.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
