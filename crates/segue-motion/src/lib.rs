//! Frame-driven CSS property transitions for the segue engine.
//!
//! This crate provides:
//! - **Transition engine**: One handle per (node, property) pair, advanced once per frame
//! - **Property strategies**: Registrable per-property interpolation behavior
//! - **Easing**: The five CSS timing keywords over linear and sine shapes
//! - **Style sink**: The trait through which frame values reach the host scene
//!
//! # Architecture
//!
//! ```text
//! TransitionEngine
//!   ├── Handles (one per animating node/property pair)
//!   ├── Live values (interruption handoff, keyed by node/property)
//!   └── StrategyRegistry (property name → interpolation strategy)
//!
//! StyleSink
//!   └── Host scene storage the engine reads start values from and
//!       writes frame values into
//! ```
//!
//! A typical frame: the host diffs styles, calls
//! [`TransitionEngine::apply_transition`] with the parsed declarations,
//! then calls [`TransitionEngine::tick`] with the frame delta and drains
//! lifecycle events.

pub mod easing;
pub mod engine;
pub mod events;
pub mod handle;
pub mod interpolate;
pub mod sink;
pub mod strategy;
pub mod value;

pub use easing::{CurveShape, EaseDirection};
pub use engine::TransitionEngine;
pub use events::{EventQueue, TransitionEvent};
pub use handle::{HandleId, HandleState, TransitionHandle};
pub use interpolate::Interpolate;
pub use sink::{MemorySink, Paint, StyleSink};
pub use strategy::{PaintRole, SizeAxis, Strategy, StrategyRegistry};
pub use value::{StyleMap, StyleValue};
