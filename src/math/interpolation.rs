//! Linear interpolation and easing curves
//!
//! Small helpers behind camera view transitions, generic over float
//! width so callers keep their own precision.

use num_traits::Float;

/// Linearly interpolate between `start` and `end` at parameter `t`
pub fn lerp<T: Float>(start: T, end: T, t: T) -> T {
    (end - start).mul_add(t, start)
}

/// Hermite easing of a parameter already in [0, 1]
///
/// Zero first derivatives at both ends, so eased transitions begin and
/// settle without a velocity step.
pub fn smoothstep<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    t * t * (three - two * t)
}
