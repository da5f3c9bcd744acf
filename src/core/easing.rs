//! Easing curves and progress helpers shared by every timed animation.
//!
//! All curves take linear progress `p` in `[0, 1]` and return eased progress
//! that starts at 0 and ends at 1.

/// Linear progress of `elapsed` over `duration`, capped to `[0, 1]`.
///
/// A non-positive duration is treated as already finished.
#[inline]
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

#[inline]
pub fn ease_in_out_cubic(p: f32) -> f32 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn ease_in_out_quad(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        -1.0 + (4.0 - 2.0 * p) * p
    }
}

/// `1 - e^(-rate * p)`, normalized by its value at `p = 1` so it ends at exactly 1.
#[inline]
pub fn normalized_exp_out(p: f32, rate: f32) -> f32 {
    let max = 1.0 - (-rate).exp();
    if max <= f32::EPSILON {
        return p;
    }
    (1.0 - (-rate * p).exp()) / max
}
