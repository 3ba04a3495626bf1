//! Self-driving marquee strip.
//!
//! Advances a horizontal offset every frame from the elapsed time, scaled
//! by the smoothed page-scroll velocity so fast scrolling visibly whips
//! the strip along. The offset wraps into [-50, 0] percent; the strip's
//! content is rendered in four copies so the wrap never shows a seam.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::spring::Spring;

/// Copies of the strip content laid end to end by the renderer.
pub const MARQUEE_COPIES: usize = 4;

/// Scroll velocity (rows/s) that maps to the maximum acceleration factor.
const VELOCITY_RANGE: f64 = 1000.0;
/// Acceleration factor at `VELOCITY_RANGE`; unclamped beyond it.
const VELOCITY_FACTOR_MAX: f64 = 5.0;

/// Travel direction of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeDirection {
    Left,
    Right,
}

impl MarqueeDirection {
    #[inline]
    fn factor(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Wrap `v` into [min, max) with seamless modular arithmetic.
#[inline]
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    min + (((v - min) % range) + range) % range
}

/// Marquee auto-scroller
#[derive(Debug, Clone)]
pub struct Marquee {
    base_speed: f64,
    direction: MarqueeDirection,
    pause_on_hover: bool,
    hovered: bool,
    /// Wrapped offset in percent, always within [-50, 0]
    position: f64,
    /// Smoothed page-scroll velocity in rows/s
    velocity: Spring,
}

impl Marquee {
    pub fn new(base_speed: f64, direction: MarqueeDirection, pause_on_hover: bool) -> Self {
        Self {
            base_speed,
            direction,
            pause_on_hover,
            hovered: false,
            position: 0.0,
            // The smoothing constants the page uses for scroll velocity.
            velocity: Spring::new(400.0, 50.0, 1.0),
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    /// Feed the current raw page-scroll velocity in rows/s.
    pub fn observe_scroll_velocity(&mut self, rows_per_sec: f64) {
        self.velocity.set_target(rows_per_sec);
    }

    /// Signed acceleration factor derived from the smoothed velocity.
    pub fn velocity_factor(&self) -> f64 {
        (self.velocity.value() / VELOCITY_RANGE) * VELOCITY_FACTOR_MAX
    }

    /// Current wrapped offset in percent, in [-50, 0].
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Advance by the elapsed time since the previous frame.
    ///
    /// Velocity smoothing always runs; positional advancement freezes
    /// while hovered with `pause_on_hover` (no reset).
    pub fn advance(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.velocity.update(secs);

        if self.is_paused() {
            return;
        }

        let mut move_by = self.direction.factor() * self.base_speed * secs;
        let factor = self.velocity_factor();
        if factor != 0.0 {
            move_by += self.direction.factor() * move_by * factor;
        }

        self.position = wrap(-50.0, 0.0, self.position + move_by);
    }
}
