//! Time calculation utilities shared by the animation primitives.
//!
//! All functions take the observation instant explicitly instead of
//! reading the clock, so timing laws can be tested with synthetic time.

use std::time::{Duration, Instant};

/// Progress of an animation that started at `start`, observed at `now`,
/// after an initial `delay` and running for `duration`.
///
/// Returns 0.0 while still inside the delay and 1.0 from completion on;
/// a zero duration completes immediately after the delay.
#[inline]
pub fn progress(start: Instant, now: Instant, delay: Duration, duration: Duration) -> f64 {
    let elapsed = now.saturating_duration_since(start);
    if elapsed <= delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let active = elapsed - delay;
    (active.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Check if an animation has run to completion.
#[inline]
pub fn is_complete(start: Instant, now: Instant, delay: Duration, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= delay + duration
}

/// Linear interpolation between two values, t in [0.0, 1.0].
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
