//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Timestamps are milliseconds from the frame scheduler's clock.

/// Fraction of the animation elapsed, unclamped
#[inline]
pub fn elapsed_fraction(elapsed_ms: f64, timeout_ms: f64) -> f64 {
    if timeout_ms <= 0.0 {
        return 1.0;
    }
    elapsed_ms / timeout_ms
}

/// Check if the animation has run its full duration
#[inline]
pub fn is_complete(elapsed_ms: f64, timeout_ms: f64) -> bool {
    elapsed_ms >= timeout_ms
}

/// Whole-pixel distance covered at eased progress `pos`, never past
/// `magnitude`
#[inline]
pub fn eased_distance(magnitude: f64, pos: f64) -> f64 {
    magnitude.min(magnitude * pos).round()
}

/// Direction of a delta, zero counts as positive
#[inline]
pub fn direction(delta: f64) -> f64 {
    if delta < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// A timeout the animation can actually run with
#[inline]
pub fn is_valid_timeout(timeout_ms: f64) -> bool {
    timeout_ms.is_finite() && timeout_ms > 0.0
}
