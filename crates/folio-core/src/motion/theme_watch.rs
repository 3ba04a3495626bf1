//! Transient "theme changing" pulse.
//!
//! Consumes flip events from the theme store and holds an `active` flag
//! for a fixed cool-down window, which the renderer uses to crossfade
//! palettes. The pulse never decides the theme itself.
//!
//! A flip during an open window moves the single deadline forward rather
//! than stacking timers, so the flag always clears within one window of
//! the latest flip.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::theme::{ThemeEvent, ThemeMode};

/// Cool-down window after a flip.
pub const PULSE_WINDOW: Duration = Duration::from_millis(500);

/// Theme transition pulse
#[derive(Debug, Clone)]
pub struct ThemePulse {
    active: bool,
    deadline: Option<Instant>,
    window: Duration,
    last_mode: Option<ThemeMode>,
    /// Mode being faded away from while active
    from_mode: Option<ThemeMode>,
}

impl ThemePulse {
    pub fn new() -> Self {
        Self::with_window(PULSE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            active: false,
            deadline: None,
            window,
            last_mode: None,
            from_mode: None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The mode the crossfade is leaving, while active.
    #[inline]
    pub fn from_mode(&self) -> Option<ThemeMode> {
        if self.active {
            self.from_mode
        } else {
            None
        }
    }

    /// Crossfade progress in [0, 1]; 1.0 when no transition is running.
    pub fn progress(&self, now: Instant) -> f64 {
        match (self.active, self.deadline) {
            (true, Some(deadline)) => {
                let remaining = deadline.saturating_duration_since(now);
                1.0 - (remaining.as_secs_f64() / self.window.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Observe one theme event at `now`.
    ///
    /// The first observation seeds the known mode without pulsing; a
    /// repeated value is ignored; an actual flip (re)arms the window.
    pub fn observe(&mut self, event: ThemeEvent, now: Instant) {
        match self.last_mode {
            None => {
                self.last_mode = Some(event.mode);
            }
            Some(last) if last == event.mode => {}
            Some(last) => {
                self.from_mode = Some(last);
                self.last_mode = Some(event.mode);
                self.active = true;
                self.deadline = Some(now + self.window);
                tracing::debug!(theme = event.mode.as_str(), "theme pulse armed");
            }
        }
    }

    /// Drain all pending events from a store subscription.
    pub fn poll(&mut self, rx: &Receiver<ThemeEvent>, now: Instant) {
        for event in rx.try_iter() {
            self.observe(event, now);
        }
    }

    /// Clear the flag once the window has elapsed.
    pub fn update(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.active = false;
                self.deadline = None;
            }
        }
    }

    /// Idempotent teardown; safe to call any number of times.
    pub fn reset(&mut self) {
        self.active = false;
        self.deadline = None;
        self.from_mode = None;
    }
}

impl Default for ThemePulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn flip(mode: ThemeMode) -> ThemeEvent {
        ThemeEvent { mode }
    }

    fn seeded(base: Instant) -> ThemePulse {
        let mut pulse = ThemePulse::new();
        pulse.observe(flip(ThemeMode::Light), base);
        pulse
    }

    #[test]
    fn test_cooldown_bound() {
        let base = Instant::now();
        let mut pulse = seeded(base);

        pulse.observe(flip(ThemeMode::Dark), base);
        assert!(pulse.is_active());

        // Active somewhere inside the window...
        pulse.update(at(base, 499));
        assert!(pulse.is_active());

        // ...and false at T+500ms and beyond.
        pulse.update(at(base, 500));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_first_observation_does_not_pulse() {
        let base = Instant::now();
        let pulse = seeded(base);
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_repeated_mode_ignored() {
        let base = Instant::now();
        let mut pulse = seeded(base);
        pulse.observe(flip(ThemeMode::Light), at(base, 10));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_rapid_flips_restart_single_window() {
        let base = Instant::now();
        let mut pulse = seeded(base);

        pulse.observe(flip(ThemeMode::Dark), base);
        pulse.observe(flip(ThemeMode::Light), at(base, 300));

        // The first flip's deadline has passed but the window restarted.
        pulse.update(at(base, 600));
        assert!(pulse.is_active());

        // 500ms after the *latest* flip the flag is down.
        pulse.update(at(base, 800));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_progress_runs_zero_to_one() {
        let base = Instant::now();
        let mut pulse = seeded(base);
        pulse.observe(flip(ThemeMode::Dark), base);

        assert!(pulse.progress(base) < 0.01);
        let mid = pulse.progress(at(base, 250));
        assert!(mid > 0.4 && mid < 0.6);
        assert_eq!(pulse.progress(at(base, 500)), 1.0);
    }

    #[test]
    fn test_from_mode_only_while_active() {
        let base = Instant::now();
        let mut pulse = seeded(base);
        pulse.observe(flip(ThemeMode::Dark), base);
        assert_eq!(pulse.from_mode(), Some(ThemeMode::Light));

        pulse.update(at(base, 600));
        assert_eq!(pulse.from_mode(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let base = Instant::now();
        let mut pulse = seeded(base);
        pulse.observe(flip(ThemeMode::Dark), base);
        pulse.reset();
        pulse.reset();
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_store_to_pulse_plumbing() {
        use crate::theme::ThemeStore;

        let base = Instant::now();
        let mut store = ThemeStore::new(ThemeMode::Light);
        let rx = store.subscribe();
        let mut pulse = seeded(base);

        store.toggle();
        pulse.poll(&rx, at(base, 5));
        assert!(pulse.is_active());
        assert_eq!(pulse.from_mode(), Some(ThemeMode::Light));
    }
}
