//! Smooth page scrolling.
//!
//! Target-based eased animation with delta batching: rapid wheel/key
//! events within a frame accumulate and retarget one animation instead of
//! stacking. Also tracks the raw scroll velocity each update, which the
//! marquee consumes for its acceleration factor.

use std::time::{Duration, Instant};

use crate::config::ScrollTuning;

use super::timing::{lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
}

/// Page scroll controller
#[derive(Debug, Clone)]
pub struct PageScroll {
    animation: Option<ActiveAnimation>,
    config: ScrollTuning,
    /// Current scroll offset in rows
    current: f64,
    /// Batched delta applied on the next update
    pending_delta: f64,
    /// (instant, position) of the previous update, for velocity
    last_sample: Option<(Instant, f64)>,
    /// Raw velocity in rows/s measured across the last update
    velocity: f64,
}

impl PageScroll {
    pub fn new(config: ScrollTuning) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
            last_sample: None,
            velocity: 0.0,
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Final position once the active animation (and pending deltas) land.
    pub fn target(&self) -> f64 {
        let base = self
            .animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current);
        base + self.pending_delta
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Raw scroll velocity in rows/s from the last update.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Jump immediately, cancelling any animation.
    pub fn set_scroll(&mut self, position: f64) {
        self.animation = None;
        self.pending_delta = 0.0;
        self.current = position.max(0.0);
    }

    /// Animate to an absolute target position.
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64, now: Instant) {
        let target = target.clamp(0.0, max_scroll.max(0.0));

        if !self.is_smooth() {
            self.current = target;
            self.animation = None;
            self.pending_delta = 0.0;
            return;
        }

        self.pending_delta = 0.0;
        if (target - self.current).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.duration(),
        });
    }

    /// Scroll by a delta (positive = down). Batched until the next update.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        if !self.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, max_scroll.max(0.0));
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: f64) {
        self.scroll_by(self.config.scroll_lines as f64, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: f64) {
        self.scroll_by(-(self.config.scroll_lines as f64), max_scroll);
    }

    pub fn half_page_down(&mut self, viewport: f64, max_scroll: f64) {
        self.scroll_by((viewport / 2.0).max(1.0), max_scroll);
    }

    pub fn half_page_up(&mut self, viewport: f64, max_scroll: f64) {
        self.scroll_by(-(viewport / 2.0).max(1.0), max_scroll);
    }

    pub fn page_down(&mut self, viewport: f64, max_scroll: f64) {
        self.scroll_by(viewport, max_scroll);
    }

    pub fn page_up(&mut self, viewport: f64, max_scroll: f64) {
        self.scroll_by(-viewport, max_scroll);
    }

    /// Advance the animation and return the current position.
    ///
    /// Batched deltas retarget relative to the in-flight animation's
    /// destination so chained scrolling stays continuous.
    pub fn update(&mut self, max_scroll: f64, now: Instant) -> f64 {
        let max_scroll = max_scroll.max(0.0);

        if self.pending_delta != 0.0 {
            let target = self
                .animation
                .as_ref()
                .map(|a| a.to)
                .unwrap_or(self.current);
            let new_target = (target + self.pending_delta).clamp(0.0, max_scroll);
            self.pending_delta = 0.0;

            if (new_target - self.current).abs() > f64::EPSILON {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: new_target,
                    duration: self.duration(),
                });
            } else {
                self.animation = None;
            }
        }

        if let Some(ref anim) = self.animation {
            let t = progress(anim.start, now, Duration::ZERO, anim.duration);
            if t >= 1.0 {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let eased = self.config.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased).min(max_scroll);
            }
        }

        // Velocity across updates, for the marquee's acceleration factor.
        if let Some((prev_at, prev_pos)) = self.last_sample {
            let dt = now.saturating_duration_since(prev_at).as_secs_f64();
            if dt > 0.0 {
                self.velocity = (self.current - prev_pos) / dt;
            }
        }
        self.last_sample = Some((now, self.current));

        self.current
    }

    /// Cancel any active animation and stop at the current position.
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config(duration_ms: u64) -> ScrollTuning {
        ScrollTuning {
            animation_duration_ms: duration_ms,
            ..Default::default()
        }
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollTuning {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroll = PageScroll::new(config);
        let now = Instant::now();

        scroll.scroll_to(100.0, 200.0, now);
        assert_eq!(scroll.current(), 100.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_animation_eases_to_target() {
        let base = Instant::now();
        let mut scroll = PageScroll::new(smooth_config(100));

        scroll.scroll_to(100.0, 200.0, base);
        assert!(scroll.is_animating());

        let mid = scroll.update(200.0, at(base, 50));
        assert!(mid > 0.0 && mid < 100.0);

        let done = scroll.update(200.0, at(base, 150));
        assert_eq!(done, 100.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_scroll_by_batches() {
        let base = Instant::now();
        let mut scroll = PageScroll::new(smooth_config(100));

        scroll.scroll_by(10.0, 200.0);
        scroll.scroll_by(10.0, 200.0);
        scroll.scroll_by(10.0, 200.0);

        scroll.update(200.0, base);
        assert_eq!(scroll.target(), 30.0);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let base = Instant::now();
        let mut scroll = PageScroll::new(smooth_config(100));
        scroll.set_scroll(50.0);
        scroll.scroll_to(300.0, 100.0, base);
        scroll.update(100.0, base);
        assert!(scroll.target() <= 100.0);
    }

    #[test]
    fn test_chained_delta_retargets_from_destination() {
        let base = Instant::now();
        let mut scroll = PageScroll::new(smooth_config(100));

        scroll.scroll_by(20.0, 500.0);
        scroll.update(500.0, base);
        // Mid-flight, another step lands relative to the destination.
        scroll.update(500.0, at(base, 50));
        scroll.scroll_by(20.0, 500.0);
        scroll.update(500.0, at(base, 60));
        assert_eq!(scroll.target(), 40.0);
    }

    #[test]
    fn test_velocity_measured_across_updates() {
        let base = Instant::now();
        let config = ScrollTuning {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroll = PageScroll::new(config);

        scroll.update(1000.0, base);
        scroll.set_scroll(0.0);
        scroll.scroll_by(50.0, 1000.0);
        scroll.update(1000.0, at(base, 100));
        // 50 rows in 100ms = 500 rows/s.
        assert!((scroll.velocity() - 500.0).abs() < 1.0);
    }

    #[test]
    fn test_scroll_up_never_goes_negative() {
        let base = Instant::now();
        let mut scroll = PageScroll::new(smooth_config(50));
        scroll.scroll_up(100.0);
        scroll.update(100.0, base);
        let settled = scroll.update(100.0, at(base, 100));
        assert!(settled >= 0.0);
    }
}
