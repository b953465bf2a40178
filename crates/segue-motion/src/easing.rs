//! Easing functions for transition progress.
//!
//! The CSS timing keywords decompose into a curve shape and an ease
//! direction. Only two shapes exist today: a straight line and a sine
//! segment. `ease` and its variants all ride the sine shape with different
//! directions.

use segue_css::TimingCurve;
use std::f32::consts::{FRAC_PI_2, PI};

/// The shape of an easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
    /// Constant velocity.
    Linear,
    /// Sinusoidal acceleration.
    Sine,
}

/// Which end of the curve the easing applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    InOut,
}

/// Decompose a CSS timing keyword into shape and direction.
pub fn curve_parts(curve: TimingCurve) -> (CurveShape, EaseDirection) {
    match curve {
        TimingCurve::Linear => (CurveShape::Linear, EaseDirection::InOut),
        TimingCurve::Ease => (CurveShape::Sine, EaseDirection::InOut),
        TimingCurve::EaseIn => (CurveShape::Sine, EaseDirection::In),
        TimingCurve::EaseOut => (CurveShape::Sine, EaseDirection::Out),
        TimingCurve::EaseInOut => (CurveShape::Sine, EaseDirection::InOut),
    }
}

/// Apply an easing curve to a progress value.
///
/// # Arguments
/// * `curve` - The timing keyword to apply
/// * `t` - Raw progress, clamped to 0.0..=1.0
///
/// # Returns
/// Eased progress in 0.0..=1.0.
pub fn evaluate(curve: TimingCurve, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match curve_parts(curve) {
        (CurveShape::Linear, _) => t,
        (CurveShape::Sine, EaseDirection::In) => sine_in(t),
        (CurveShape::Sine, EaseDirection::Out) => sine_out(t),
        (CurveShape::Sine, EaseDirection::InOut) => sine_in_out(t),
    }
}

#[inline]
fn sine_in(t: f32) -> f32 {
    1.0 - (t * FRAC_PI_2).cos()
}

#[inline]
fn sine_out(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}

#[inline]
fn sine_in_out(t: f32) -> f32 {
    (1.0 - (PI * t).cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_all_curves_hit_boundaries() {
        let curves = [
            TimingCurve::Linear,
            TimingCurve::Ease,
            TimingCurve::EaseIn,
            TimingCurve::EaseOut,
            TimingCurve::EaseInOut,
        ];
        for curve in curves {
            assert!(approx_eq(evaluate(curve, 0.0), 0.0), "{curve:?} at 0");
            assert!(approx_eq(evaluate(curve, 1.0), 1.0), "{curve:?} at 1");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert!(approx_eq(evaluate(TimingCurve::Linear, 0.25), 0.25));
        assert!(approx_eq(evaluate(TimingCurve::Linear, 0.5), 0.5));
        assert!(approx_eq(evaluate(TimingCurve::Linear, 0.75), 0.75));
    }

    #[test]
    fn test_input_clamped() {
        assert!(approx_eq(evaluate(TimingCurve::Ease, -2.0), 0.0));
        assert!(approx_eq(evaluate(TimingCurve::Ease, 3.0), 1.0));
        assert!(approx_eq(evaluate(TimingCurve::Linear, 1.5), 1.0));
    }

    #[test]
    fn test_curves_monotonic() {
        let curves = [
            TimingCurve::Linear,
            TimingCurve::Ease,
            TimingCurve::EaseIn,
            TimingCurve::EaseOut,
            TimingCurve::EaseInOut,
        ];
        for curve in curves {
            let mut prev = evaluate(curve, 0.0);
            for i in 1..=20 {
                let next = evaluate(curve, i as f32 / 20.0);
                assert!(next >= prev - EPSILON, "{curve:?} not monotonic at {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_ease_in_starts_slow() {
        // Sine ease-in stays below the diagonal early on.
        assert!(evaluate(TimingCurve::EaseIn, 0.25) < 0.25);
        assert!(evaluate(TimingCurve::EaseIn, 0.5) < 0.5);
    }

    #[test]
    fn test_ease_out_starts_fast() {
        assert!(evaluate(TimingCurve::EaseOut, 0.25) > 0.25);
        assert!(evaluate(TimingCurve::EaseOut, 0.5) > 0.5);
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        assert!(approx_eq(evaluate(TimingCurve::EaseInOut, 0.5), 0.5));
        let early = evaluate(TimingCurve::EaseInOut, 0.2);
        let late = evaluate(TimingCurve::EaseInOut, 0.8);
        assert!(approx_eq(early + late, 1.0));
    }

    #[test]
    fn test_ease_matches_ease_in_out() {
        // Both keywords use the same sine in-out segment.
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(approx_eq(
                evaluate(TimingCurve::Ease, t),
                evaluate(TimingCurve::EaseInOut, t)
            ));
        }
    }

    #[test]
    fn test_curve_parts_mapping() {
        assert_eq!(
            curve_parts(TimingCurve::Linear),
            (CurveShape::Linear, EaseDirection::InOut)
        );
        assert_eq!(
            curve_parts(TimingCurve::Ease),
            (CurveShape::Sine, EaseDirection::InOut)
        );
        assert_eq!(
            curve_parts(TimingCurve::EaseIn),
            (CurveShape::Sine, EaseDirection::In)
        );
        assert_eq!(
            curve_parts(TimingCurve::EaseOut),
            (CurveShape::Sine, EaseDirection::Out)
        );
        assert_eq!(
            curve_parts(TimingCurve::EaseInOut),
            (CurveShape::Sine, EaseDirection::InOut)
        );
    }
}
