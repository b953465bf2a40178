//! Transition lifecycle events.
//!
//! The engine queues an event for every handle lifecycle edge. Hosts drain
//! the queue after ticking to drive sounds, focus changes, or chained
//! transitions.

use crate::handle::HandleId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An event emitted by the transition engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// A handle was created and started running.
    Started {
        handle_id: HandleId,
        node: String,
        property: String,
    },
    /// A handle ran to completion and wrote its exact target value.
    Finished {
        handle_id: HandleId,
        node: String,
        property: String,
    },
    /// A handle was discarded before completion: superseded by a newer
    /// transition, preempted by an immediate apply, or swept by cleanup.
    Killed {
        handle_id: HandleId,
        node: String,
        property: String,
    },
}

impl TransitionEvent {
    /// The handle this event describes.
    pub fn handle_id(&self) -> HandleId {
        match self {
            Self::Started { handle_id, .. }
            | Self::Finished { handle_id, .. }
            | Self::Killed { handle_id, .. } => *handle_id,
        }
    }

    /// The node this event describes.
    pub fn node(&self) -> &str {
        match self {
            Self::Started { node, .. }
            | Self::Finished { node, .. }
            | Self::Killed { node, .. } => node,
        }
    }

    /// The property this event describes.
    pub fn property(&self) -> &str {
        match self {
            Self::Started { property, .. }
            | Self::Finished { property, .. }
            | Self::Killed { property, .. } => property,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    pub fn is_killed(&self) -> bool {
        matches!(self, Self::Killed { .. })
    }
}

/// FIFO queue of transition events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: TransitionEvent) {
        self.events.push_back(event);
    }

    /// Remove and return the oldest event.
    pub fn pop(&mut self) -> Option<TransitionEvent> {
        self.events.pop_front()
    }

    /// Look at the oldest event without removing it.
    pub fn peek(&self) -> Option<&TransitionEvent> {
        self.events.front()
    }

    /// Drain all queued events in order.
    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard all queued events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterate over queued events for one node without draining.
    pub fn events_for_node<'a>(
        &'a self,
        node: &'a str,
    ) -> impl Iterator<Item = &'a TransitionEvent> + 'a {
        self.events.iter().filter(move |e| e.node() == node)
    }
}
