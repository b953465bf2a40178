//! The style sink: where interpolated values land each frame.
//!
//! The engine never owns the scene. It reads current visual state from and
//! writes frame values into a [`StyleSink`] implemented by the host. The
//! bundled [`MemorySink`] backs the test suite and headless embedders.

use crate::strategy::{PaintRole, SizeAxis};
use crate::value::StyleValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A colored paint applied to one visual role of a node.
///
/// When a color transition targets a role the node has never painted, the
/// engine synthesizes a default paint and animates its color. Any sibling
/// attributes the host would normally have set (corner radius, stroke
/// width) start from their defaults in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// RGBA color components in the 0..=1 range.
    pub color: [f32; 4],
    /// Corner rounding in layout units.
    pub corner_radius: f32,
    /// Stroke width in layout units. Only meaningful for border paints.
    pub stroke_width: f32,
}

impl Paint {
    /// A solid paint with no rounding or stroke.
    pub fn solid(color: [f32; 4]) -> Self {
        Self {
            color,
            corner_radius: 0.0,
            stroke_width: 0.0,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::solid([0.0, 0.0, 0.0, 0.0])
    }
}

/// Host-side storage for per-node visual state.
///
/// All write methods ignore nodes the sink does not know about, so handles
/// that outlive their node degrade to no-ops rather than errors.
pub trait StyleSink {
    /// Check whether a node still exists in the host scene.
    fn is_live(&self, node: &str) -> bool;

    /// Current opacity of a node. Nodes default to fully opaque.
    fn alpha(&self, node: &str) -> f32;

    /// Write a node's opacity.
    fn set_alpha(&mut self, node: &str, alpha: f32);

    /// Current paint for a role, if the node has one.
    fn paint(&self, node: &str, role: PaintRole) -> Option<Paint>;

    /// Write a paint for a role.
    fn set_paint(&mut self, node: &str, role: PaintRole, paint: Paint);

    /// Current size along an axis, if the node has one.
    fn size(&self, node: &str, axis: SizeAxis) -> Option<i32>;

    /// Write a size along an axis.
    fn set_size(&mut self, node: &str, axis: SizeAxis, value: i32);

    /// Current value of a generic attribute.
    fn attribute(&self, node: &str, name: &str) -> Option<StyleValue>;

    /// Write a generic attribute.
    fn set_attribute(&mut self, node: &str, name: &str, value: StyleValue);
}

#[derive(Debug, Clone, PartialEq)]
struct NodeRecord {
    alpha: f32,
    paints: HashMap<PaintRole, Paint>,
    sizes: HashMap<SizeAxis, i32>,
    attributes: HashMap<String, StyleValue>,
}

impl Default for NodeRecord {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            paints: HashMap::new(),
            sizes: HashMap::new(),
            attributes: HashMap::new(),
        }
    }
}

/// An in-memory [`StyleSink`] for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    nodes: HashMap<String, NodeRecord>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Nodes start fully opaque with no paints or sizes.
    pub fn insert_node(&mut self, node: impl Into<String>) {
        self.nodes.insert(node.into(), NodeRecord::default());
    }

    /// Remove a node and all its state.
    pub fn remove_node(&mut self, node: &str) {
        self.nodes.remove(node);
    }

    /// Check whether a node is registered.
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the sink has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl StyleSink for MemorySink {
    fn is_live(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    fn alpha(&self, node: &str) -> f32 {
        self.nodes.get(node).map(|n| n.alpha).unwrap_or(1.0)
    }

    fn set_alpha(&mut self, node: &str, alpha: f32) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.alpha = alpha;
        }
    }

    fn paint(&self, node: &str, role: PaintRole) -> Option<Paint> {
        self.nodes.get(node).and_then(|n| n.paints.get(&role)).copied()
    }

    fn set_paint(&mut self, node: &str, role: PaintRole, paint: Paint) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.paints.insert(role, paint);
        }
    }

    fn size(&self, node: &str, axis: SizeAxis) -> Option<i32> {
        self.nodes.get(node).and_then(|n| n.sizes.get(&axis)).copied()
    }

    fn set_size(&mut self, node: &str, axis: SizeAxis, value: i32) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.sizes.insert(axis, value);
        }
    }

    fn attribute(&self, node: &str, name: &str) -> Option<StyleValue> {
        self.nodes
            .get(node)
            .and_then(|n| n.attributes.get(name))
            .cloned()
    }

    fn set_attribute(&mut self, node: &str, name: &str, value: StyleValue) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.attributes.insert(name.to_string(), value);
        }
    }
}
