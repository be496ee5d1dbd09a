//! Numbers and scalar helpers.

use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float: nt::Float + approx::AbsDiffEq<Epsilon = Self> {
    const ZERO: Self;
    const ONE: Self;
    const ONE_HALF: Self;
    /// Tolerance used for approximate comparisons of this type.
    const TOLERANCE: Self;
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ONE_HALF: Self = 0.5;
            const TOLERANCE: Self = crate::consts::TOLERANCE as $f;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Linearly interpolates between `start` (at `t = 0`) and `end` (at `t = 1`).
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<F: Float>(start: F, end: F, t: F) -> F {
    start + (end - start) * t
}

/// Moves `current` towards `goal` by at most `step`, landing exactly on `goal`
/// once it is within reach.
///
/// `step` is expected to be non-negative.
#[inline]
pub fn lerp_step<F: Float>(goal: F, current: F, step: F) -> F {
    let difference = goal - current;
    if difference > step {
        current + step
    } else if difference < -step {
        current - step
    } else {
        goal
    }
}

/// Whether the magnitude of `value` is below the crate tolerance.
#[inline]
pub fn approx_zero<F: Float>(value: F) -> bool {
    value.abs() < F::TOLERANCE
}
