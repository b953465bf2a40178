//! Interpolation between style values.

/// Types that can be interpolated between two values.
pub trait Interpolate: Sized {
    /// Interpolate from `self` to `to` with eased progress `t`.
    ///
    /// When `t = 0.0`, returns `self`. When `t = 1.0`, returns `to`.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

// The two-product form is exact at both endpoints: t = 0.0 yields `from`
// and t = 1.0 yields `to` with no rounding drift. Completion writes depend
// on that.
#[inline]
pub(crate) fn lerp_f64(from: f64, to: f64, t: f32) -> f64 {
    let t = t as f64;
    from * (1.0 - t) + to * t
}

#[inline]
pub(crate) fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f64(*self, *to, t)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Interpolate for [f32; 4] {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        [
            lerp_f32(self[0], to[0], t),
            lerp_f32(self[1], to[1], t),
            lerp_f32(self[2], to[2], t),
            lerp_f32(self[3], to[3], t),
        ]
    }
}
