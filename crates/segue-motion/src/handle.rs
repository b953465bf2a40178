//! Transition handles: one in-flight property animation.

use crate::easing;
use crate::interpolate::{lerp_f32, lerp_f64, Interpolate};
use crate::sink::StyleSink;
use crate::strategy::{PaintRole, SizeAxis, Strategy};
use crate::value::StyleValue;
use segue_css::TimingCurve;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a transition handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub u64);

impl HandleId {
    /// Generate a new unique handle ID.
    pub fn new() -> Self {
        Self(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a transition handle.
///
/// `Running` covers the leading delay phase as well as active
/// interpolation. A handle leaves `Running` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleState {
    /// Waiting out the delay or interpolating.
    #[default]
    Running,
    /// Ran to completion. The exact target value has been written.
    Finished,
    /// Superseded or discarded before completion. No final write happens.
    Killed,
}

/// The typed interpolation a handle performs, resolved once at creation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Track {
    Alpha { from: f32, to: f32 },
    Paint {
        role: PaintRole,
        from: [f32; 4],
        to: [f32; 4],
    },
    Size { axis: SizeAxis, from: f64, to: f64 },
    Scalar { from: f64, to: f64 },
    Snap { target: StyleValue },
}

impl Track {
    /// Build the track for a strategy from resolved endpoint values.
    ///
    /// Endpoints that do not coerce to the strategy's value kind degrade
    /// to a snap of the target.
    pub(crate) fn between(strategy: Strategy, start: &StyleValue, target: &StyleValue) -> Self {
        let snap = || Self::Snap {
            target: target.clone(),
        };
        match strategy {
            Strategy::Alpha => match (start.as_number(), target.as_number()) {
                (Some(from), Some(to)) => Self::Alpha {
                    from: from as f32,
                    to: to as f32,
                },
                _ => snap(),
            },
            Strategy::Color { role } => match (start.as_color(), target.as_color()) {
                (Some(from), Some(to)) => Self::Paint { role, from, to },
                _ => snap(),
            },
            Strategy::Size { axis } => match (start.as_number(), target.as_number()) {
                (Some(from), Some(to)) => Self::Size { axis, from, to },
                _ => snap(),
            },
            Strategy::Scalar => match (start.as_number(), target.as_number()) {
                (Some(from), Some(to)) => Self::Scalar { from, to },
                _ => snap(),
            },
            Strategy::Snap => snap(),
        }
    }

    /// Compute the interpolated value at eased progress `t` without
    /// touching the sink.
    pub(crate) fn sample(&self, t: f32) -> StyleValue {
        match self {
            Self::Alpha { from, to } => {
                StyleValue::from(lerp_f32(*from, *to, t).clamp(0.0, 1.0))
            }
            Self::Paint { from, to, .. } => StyleValue::from(from.interpolate(to, t)),
            Self::Size { from, to, .. } => StyleValue::from(lerp_f64(*from, *to, t)),
            Self::Scalar { from, to } => StyleValue::from(lerp_f64(*from, *to, t)),
            Self::Snap { target } => target.clone(),
        }
    }

    /// Write the interpolated value at eased progress `t` into the sink
    /// and return it.
    ///
    /// Sizes round toward zero at the sink boundary only. The returned
    /// value keeps the untruncated interpolation point so an interrupting
    /// transition resumes from the real position.
    pub(crate) fn write(
        &self,
        sink: &mut dyn StyleSink,
        node: &str,
        property: &str,
        t: f32,
    ) -> StyleValue {
        match self {
            Self::Alpha { from, to } => {
                let alpha = lerp_f32(*from, *to, t).clamp(0.0, 1.0);
                sink.set_alpha(node, alpha);
                StyleValue::from(alpha)
            }
            Self::Paint { role, from, to } => {
                let rgba = from.interpolate(to, t);
                let mut paint = sink.paint(node, *role).unwrap_or_default();
                paint.color = rgba;
                sink.set_paint(node, *role, paint);
                StyleValue::from(rgba)
            }
            Self::Size { axis, from, to } => {
                let value = lerp_f64(*from, *to, t);
                sink.set_size(node, *axis, value.trunc() as i32);
                StyleValue::from(value)
            }
            Self::Scalar { from, to } => {
                let value = lerp_f64(*from, *to, t);
                sink.set_attribute(node, property, StyleValue::from(value));
                StyleValue::from(value)
            }
            Self::Snap { target } => {
                sink.set_attribute(node, property, target.clone());
                target.clone()
            }
        }
    }
}

/// What a handle did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
    /// Still inside the delay phase. Nothing was written.
    Delayed,
    /// Interpolating. A frame value should be written.
    Active,
    /// Crossed the end of its duration this tick, or was already done.
    Finished,
}

/// One in-flight transition for a (node, property) pair.
#[derive(Debug, Clone)]
pub struct TransitionHandle {
    pub id: HandleId,
    pub node: String,
    pub property: String,
    /// Seconds to wait before interpolation starts.
    pub delay: f32,
    /// Active interpolation length in seconds. Always greater than zero;
    /// zero-duration transitions apply synchronously and never get a
    /// handle.
    pub duration: f32,
    /// Seconds accumulated since the handle was created.
    pub elapsed: f32,
    pub timing: TimingCurve,
    pub state: HandleState,
    pub(crate) track: Track,
}

impl TransitionHandle {
    pub(crate) fn new(
        node: String,
        property: String,
        track: Track,
        duration: f32,
        delay: f32,
        timing: TimingCurve,
    ) -> Self {
        Self {
            id: HandleId::new(),
            node,
            property,
            delay,
            duration,
            elapsed: 0.0,
            timing,
            state: HandleState::Running,
            track,
        }
    }

    /// Advance the handle's clock by `dt` seconds.
    pub(crate) fn advance(&mut self, dt: f32) -> Tick {
        if self.state != HandleState::Running {
            return Tick::Finished;
        }
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return Tick::Delayed;
        }
        if self.elapsed - self.delay >= self.duration {
            self.state = HandleState::Finished;
            return Tick::Finished;
        }
        Tick::Active
    }

    /// Raw progress through the active phase, 0.0..=1.0.
    ///
    /// Stays at 0.0 throughout the delay phase.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.delay).max(0.0) / self.duration).clamp(0.0, 1.0)
    }

    /// Progress with the handle's timing curve applied.
    pub fn eased_progress(&self) -> f32 {
        easing::evaluate(self.timing, self.progress())
    }

    /// The value this handle holds at its current progress.
    pub fn current_value(&self) -> StyleValue {
        if self.state == HandleState::Finished {
            return self.track.sample(1.0);
        }
        self.track.sample(self.eased_progress())
    }

    /// Check whether the handle is still running.
    pub fn is_running(&self) -> bool {
        self.state == HandleState::Running
    }

    /// Mark a running handle as killed. Finished handles stay finished.
    pub(crate) fn kill(&mut self) {
        if self.state == HandleState::Running {
            self.state = HandleState::Killed;
        }
    }
}
