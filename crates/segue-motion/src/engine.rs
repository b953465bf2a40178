//! The transition engine.
//!
//! Owns every in-flight [`TransitionHandle`], the live value table that
//! carries interruption handoffs, and the strategy registry. Hosts call
//! [`TransitionEngine::apply_transition`] when a node's resolved styles
//! change and [`TransitionEngine::tick`] once per frame. Nothing in here
//! fails: bad input degrades to an immediate write or a skipped
//! declaration.

use crate::events::{EventQueue, TransitionEvent};
use crate::handle::{HandleId, Tick, Track, TransitionHandle};
use crate::sink::StyleSink;
use crate::strategy::{Strategy, StrategyRegistry};
use crate::value::{StyleMap, StyleValue};
use segue_config::{SegueConfig, TransitionSettings};
use segue_css::TransitionDeclaration;
use std::collections::HashMap;

/// Frame-driven manager for all property transitions.
///
/// Single-threaded by design: `apply_transition` and `tick` both take the
/// sink by mutable reference, so transitions are applied and advanced from
/// the host's frame loop. Concurrent style changes are the host's problem
/// and resolve as last-write-wins.
pub struct TransitionEngine {
    /// All in-flight handles by id.
    handles: HashMap<HandleId, TransitionHandle>,
    /// The single running handle per (node, property) pair.
    pair_index: HashMap<(String, String), HandleId>,
    /// Last interpolated value per (node, property) pair. Present exactly
    /// while the pair's handle is in flight; holds the start value during
    /// the delay phase.
    live_values: HashMap<(String, String), StyleValue>,
    strategies: StrategyRegistry,
    settings: TransitionSettings,
    log_transitions: bool,
    dirty: bool,
    events: EventQueue,
}

impl TransitionEngine {
    /// Create an engine with default settings and the standard strategy
    /// registrations.
    pub fn new() -> Self {
        Self::with_settings(TransitionSettings::default())
    }

    /// Create an engine with explicit transition settings.
    pub fn with_settings(settings: TransitionSettings) -> Self {
        Self {
            handles: HashMap::new(),
            pair_index: HashMap::new(),
            live_values: HashMap::new(),
            strategies: StrategyRegistry::with_defaults(),
            settings,
            log_transitions: false,
            dirty: false,
            events: EventQueue::new(),
        }
    }

    /// Create an engine from a loaded configuration.
    pub fn with_config(config: &SegueConfig) -> Self {
        let mut engine = Self::with_settings(config.transitions.clone());
        engine.log_transitions = config.diagnostics.log_transitions;
        engine
    }

    /// Register an animation strategy for a property name.
    pub fn register_strategy(&mut self, property: impl Into<String>, strategy: Strategy) {
        self.strategies.register(property, strategy);
    }

    /// The engine's strategy registry.
    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    /// The engine's transition settings.
    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    /// Start transitions for a node whose resolved styles changed.
    ///
    /// Each declaration is matched against `to_style`; declarations whose
    /// property has no target value are skipped. Start values resolve from
    /// the live value table first (interruption), then `from_style`, then
    /// the sink itself.
    pub fn apply_transition(
        &mut self,
        sink: &mut dyn StyleSink,
        node: &str,
        from_style: &StyleMap,
        to_style: &StyleMap,
        declarations: &[TransitionDeclaration],
    ) {
        if !sink.is_live(node) {
            tracing::debug!(node = %node, "transition request for dead node ignored");
            return;
        }
        for declaration in declarations {
            let Some(target) = to_style.get(&declaration.property) else {
                continue;
            };
            self.apply_declaration(sink, node, declaration, from_style, target);
        }
    }

    fn apply_declaration(
        &mut self,
        sink: &mut dyn StyleSink,
        node: &str,
        declaration: &TransitionDeclaration,
        from_style: &StyleMap,
        target: &StyleValue,
    ) {
        let property = declaration.property.as_str();
        let strategy = self.strategies.lookup(property);
        let key = (node.to_string(), property.to_string());

        // Interruption handoff: a live interpolated value wins over the
        // prior style snapshot, which wins over reading the node itself.
        let start = self
            .live_values
            .get(&key)
            .cloned()
            .or_else(|| from_style.get(property).cloned())
            .or_else(|| read_node_value(&*sink, node, property, strategy));

        let speed = self.settings.effective_speed();
        let duration = if self.settings.enabled {
            declaration.duration / speed
        } else {
            0.0
        };

        let Some(start) = start else {
            // Nothing to interpolate from anywhere.
            self.kill_pair(&key);
            write_immediate(sink, node, property, strategy, target);
            self.dirty = true;
            return;
        };

        if start.approx_matches(target) {
            // Already there. An in-flight handle keeps running.
            return;
        }

        if duration <= 0.0 {
            self.kill_pair(&key);
            write_immediate(sink, node, property, strategy, target);
            self.dirty = true;
            return;
        }

        // An interrupted transition is killed, never retargeted.
        self.kill_pair(&key);

        let delay = declaration.delay / speed;
        let track = Track::between(strategy, &start, target);
        let handle = TransitionHandle::new(
            node.to_string(),
            property.to_string(),
            track,
            duration,
            delay,
            declaration.timing,
        );
        if self.log_transitions {
            tracing::debug!(
                node = %node,
                property = %property,
                duration,
                delay,
                "transition started"
            );
        }
        self.events.push(TransitionEvent::Started {
            handle_id: handle.id,
            node: handle.node.clone(),
            property: handle.property.clone(),
        });
        // The live record exists for the whole handle lifetime; during the
        // delay phase it carries the start value.
        self.live_values.insert(key.clone(), start);
        self.pair_index.insert(key, handle.id);
        self.handles.insert(handle.id, handle);
        self.dirty = true;
    }

    /// Advance all handles by `dt` seconds and write frame values.
    pub fn tick(&mut self, sink: &mut dyn StyleSink, dt: f32) {
        if self.handles.is_empty() {
            return;
        }
        // The clock never runs backward.
        let dt = dt.max(0.0);

        let mut finished = Vec::new();
        for (id, handle) in self.handles.iter_mut() {
            match handle.advance(dt) {
                Tick::Delayed => {}
                Tick::Active => {
                    let value = handle.track.write(
                        sink,
                        &handle.node,
                        &handle.property,
                        handle.eased_progress(),
                    );
                    self.live_values
                        .insert((handle.node.clone(), handle.property.clone()), value);
                    self.dirty = true;
                }
                Tick::Finished => {
                    // Land exactly on the target, then retire the pair.
                    handle
                        .track
                        .write(sink, &handle.node, &handle.property, 1.0);
                    self.live_values
                        .remove(&(handle.node.clone(), handle.property.clone()));
                    finished.push(*id);
                    self.dirty = true;
                }
            }
        }

        for id in finished {
            let Some(handle) = self.handles.remove(&id) else {
                continue;
            };
            self.pair_index
                .remove(&(handle.node.clone(), handle.property.clone()));
            if self.log_transitions {
                tracing::debug!(
                    node = %handle.node,
                    property = %handle.property,
                    "transition finished"
                );
            }
            self.events.push(TransitionEvent::Finished {
                handle_id: handle.id,
                node: handle.node,
                property: handle.property,
            });
        }
    }

    /// Kill the running transition for one (node, property) pair, if any.
    ///
    /// The property freezes at its last written value. No final write
    /// happens.
    pub fn kill(&mut self, node: &str, property: &str) {
        self.kill_pair(&(node.to_string(), property.to_string()));
    }

    /// Kill every transition for a node and discard its live records.
    ///
    /// The owning framework calls this exactly once when the node leaves
    /// the scene.
    pub fn cleanup(&mut self, node: &str) {
        let keys: Vec<(String, String)> = self
            .pair_index
            .keys()
            .filter(|(nid, _)| nid == node)
            .cloned()
            .collect();
        if keys.is_empty() {
            return;
        }
        if self.log_transitions {
            tracing::debug!(node = %node, count = keys.len(), "cleanup killed transitions");
        }
        for key in keys {
            self.kill_pair(&key);
        }
    }

    fn kill_pair(&mut self, key: &(String, String)) {
        self.live_values.remove(key);
        let Some(id) = self.pair_index.remove(key) else {
            return;
        };
        if let Some(mut handle) = self.handles.remove(&id) {
            handle.kill();
            if self.log_transitions {
                tracing::debug!(
                    node = %handle.node,
                    property = %handle.property,
                    "transition killed"
                );
            }
            self.events.push(TransitionEvent::Killed {
                handle_id: handle.id,
                node: handle.node,
                property: handle.property,
            });
        }
    }

    /// The interpolated value currently held for a (node, property) pair.
    pub fn live_value(&self, node: &str, property: &str) -> Option<&StyleValue> {
        self.live_values
            .get(&(node.to_string(), property.to_string()))
    }

    /// Check whether a (node, property) pair has a running transition.
    pub fn is_animating(&self, node: &str, property: &str) -> bool {
        self.pair_index
            .contains_key(&(node.to_string(), property.to_string()))
    }

    /// Look up an in-flight handle by id.
    pub fn handle(&self, id: HandleId) -> Option<&TransitionHandle> {
        self.handles.get(&id)
    }

    /// Check whether any transitions are in flight.
    pub fn has_active_transitions(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Number of in-flight transitions.
    pub fn active_count(&self) -> usize {
        self.handles.len()
    }

    /// Number of in-flight transitions for one node.
    pub fn active_count_for_node(&self, node: &str) -> usize {
        self.pair_index.keys().filter(|(nid, _)| nid == node).count()
    }

    /// Check whether any write has happened since the last
    /// [`TransitionEngine::clear_dirty`].
    ///
    /// Immediate applies mark this too, so a frame with no surviving
    /// handles can still need a redraw.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Reset the redraw flag, typically after presenting a frame.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Drain all pending lifecycle events in order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain()
    }

    /// Check whether lifecycle events are waiting.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Number of pending lifecycle events.
    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    /// Look at the oldest pending event without removing it.
    pub fn peek_event(&self) -> Option<&TransitionEvent> {
        self.events.peek()
    }

    /// Remove and return the oldest pending event.
    pub fn pop_event(&mut self) -> Option<TransitionEvent> {
        self.events.pop()
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a property's current value off the node itself.
fn read_node_value(
    sink: &dyn StyleSink,
    node: &str,
    property: &str,
    strategy: Strategy,
) -> Option<StyleValue> {
    match strategy {
        Strategy::Alpha => Some(StyleValue::from(sink.alpha(node))),
        Strategy::Color { role } => sink.paint(node, role).map(|p| StyleValue::from(p.color)),
        Strategy::Size { axis } => sink.size(node, axis).map(StyleValue::from),
        Strategy::Scalar | Strategy::Snap => sink.attribute(node, property),
    }
}

/// Write a target value directly, bypassing interpolation.
fn write_immediate(
    sink: &mut dyn StyleSink,
    node: &str,
    property: &str,
    strategy: Strategy,
    target: &StyleValue,
) {
    match strategy {
        Strategy::Alpha => {
            if let Some(value) = target.as_number() {
                sink.set_alpha(node, (value as f32).clamp(0.0, 1.0));
                return;
            }
        }
        Strategy::Color { role } => {
            if let Some(rgba) = target.as_color() {
                let mut paint = sink.paint(node, role).unwrap_or_default();
                paint.color = rgba;
                sink.set_paint(node, role, paint);
                return;
            }
        }
        Strategy::Size { axis } => {
            if let Some(value) = target.as_number() {
                sink.set_size(node, axis, value.trunc() as i32);
                return;
            }
        }
        Strategy::Scalar | Strategy::Snap => {}
    }
    // Typed write impossible; degrade to the generic attribute setter.
    sink.set_attribute(node, property, target.clone());
}

static_assertions::assert_impl_all!(TransitionEngine: Send);
