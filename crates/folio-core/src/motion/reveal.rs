//! Reveal-on-view: a Hidden/Visible state machine driven by the host's
//! viewport containment signal.
//!
//! The host decides whether the element's box intersects the (margin-
//! inset) viewport and feeds that boolean in; the primitive owns the
//! transition timing and the derived style. An element that is not laid
//! out yet simply never reports `in_view`, which makes the missing-DOM
//! case a natural no-op.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::timing::{lerp, progress};

/// Rows travelled by vertical reveals.
pub const TRAVEL_ROWS: f64 = 3.0;
/// Columns travelled by horizontal reveals (cells are ~half as tall as wide).
pub const TRAVEL_COLS: f64 = 6.0;

/// Direction the content moves while revealing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    /// Content rises into place
    Up,
    /// Content drops into place
    Down,
    /// Content slides in leftward
    Left,
    /// Content slides in rightward
    Right,
}

impl RevealDirection {
    /// Hidden-state offset (dx columns, dy rows) relative to rest.
    fn start_offset(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, TRAVEL_ROWS),
            Self::Down => (0.0, -TRAVEL_ROWS),
            Self::Left => (TRAVEL_COLS, 0.0),
            Self::Right => (-TRAVEL_COLS, 0.0),
        }
    }
}

/// Reveal state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Latch after the first reveal; exits never hide the element again
    pub once: bool,
    /// Rows the trigger region is inset from the viewport edges
    pub margin: u16,
    pub delay: Duration,
    pub duration: Duration,
    pub direction: RevealDirection,
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            once: true,
            margin: 4,
            delay: Duration::ZERO,
            duration: Duration::from_millis(500),
            direction: RevealDirection::Up,
            easing: Easing::Quintic,
        }
    }
}

impl RevealConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    /// Collapse all timing for reduced motion; state transitions are kept,
    /// styles jump straight to their end values.
    pub fn instant(mut self) -> Self {
        self.delay = Duration::ZERO;
        self.duration = Duration::ZERO;
        self
    }
}

/// Derived style parameters for a revealing element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 fully hidden, 1.0 fully shown
    pub opacity: f64,
    /// Column offset from rest position
    pub dx: f64,
    /// Row offset from rest position
    pub dy: f64,
}

impl RevealStyle {
    fn hidden(direction: RevealDirection) -> Self {
        let (dx, dy) = direction.start_offset();
        Self { opacity: 0.0, dx, dy }
    }

    fn settled() -> Self {
        Self { opacity: 1.0, dx: 0.0, dy: 0.0 }
    }
}

/// Viewport revealer
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    phase: RevealPhase,
    has_revealed: bool,
    shown_at: Option<Instant>,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Hidden,
            has_revealed: false,
            shown_at: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(RevealConfig::default())
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn has_revealed(&self) -> bool {
        self.has_revealed
    }

    #[inline]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Feed the containment signal.
    ///
    /// Entering view the first time starts the transition; with
    /// `once=false` an exit returns the element to Hidden so it can
    /// replay on re-entry. With `once=true` the revealed state latches
    /// permanently.
    pub fn set_in_view(&mut self, in_view: bool, now: Instant) {
        match (self.phase, in_view) {
            (RevealPhase::Hidden, true) => {
                self.phase = RevealPhase::Visible;
                self.has_revealed = true;
                self.shown_at = Some(now);
            }
            (RevealPhase::Visible, false) if !self.config.once => {
                self.phase = RevealPhase::Hidden;
                self.shown_at = None;
            }
            _ => {}
        }
    }

    /// Current style parameters for the owning element.
    pub fn style(&self, now: Instant) -> RevealStyle {
        match self.phase {
            RevealPhase::Hidden => RevealStyle::hidden(self.config.direction),
            RevealPhase::Visible => {
                let Some(shown_at) = self.shown_at else {
                    return RevealStyle::settled();
                };
                let t = self.config.easing.apply(progress(
                    shown_at,
                    now,
                    self.config.delay,
                    self.config.duration,
                ));
                let (sx, sy) = self.config.direction.start_offset();
                RevealStyle {
                    opacity: t,
                    dx: lerp(sx, 0.0, t),
                    dy: lerp(sy, 0.0, t),
                }
            }
        }
    }

    /// True while a transition is mid-flight (drives the frame rate).
    pub fn is_animating(&self, now: Instant) -> bool {
        match (self.phase, self.shown_at) {
            (RevealPhase::Visible, Some(shown_at)) => !super::timing::is_complete(
                shown_at,
                now,
                self.config.delay,
                self.config.duration,
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_reveals_on_first_entry() {
        let base = Instant::now();
        let mut reveal = Reveal::with_defaults();
        assert_eq!(reveal.phase(), RevealPhase::Hidden);

        reveal.set_in_view(true, base);
        assert_eq!(reveal.phase(), RevealPhase::Visible);
        assert!(reveal.has_revealed());
    }

    #[test]
    fn test_trigger_once_latches() {
        let base = Instant::now();
        let mut reveal = Reveal::with_defaults();
        reveal.set_in_view(true, base);
        // Element leaves the viewport: must stay visible forever.
        reveal.set_in_view(false, at(base, 1000));
        assert_eq!(reveal.phase(), RevealPhase::Visible);
        assert!(reveal.has_revealed());
        let style = reveal.style(at(base, 2000));
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_repeating_hides_on_exit() {
        let base = Instant::now();
        let mut reveal = Reveal::new(RevealConfig::default().repeating());
        reveal.set_in_view(true, base);
        reveal.set_in_view(false, at(base, 100));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        // has_revealed remembers history even when the state reverts
        assert!(reveal.has_revealed());

        // Re-entry replays the transition from the new instant.
        reveal.set_in_view(true, at(base, 200));
        let style = reveal.style(at(base, 200));
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_style_eases_to_rest() {
        let base = Instant::now();
        let mut reveal = Reveal::with_defaults();
        reveal.set_in_view(true, base);

        let start = reveal.style(base);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.dy, TRAVEL_ROWS);

        let mid = reveal.style(at(base, 250));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.dy > 0.0 && mid.dy < TRAVEL_ROWS);

        let done = reveal.style(at(base, 600));
        assert_eq!(done, RevealStyle { opacity: 1.0, dx: 0.0, dy: 0.0 });
        assert!(!reveal.is_animating(at(base, 600)));
    }

    #[test]
    fn test_hidden_style_matches_direction() {
        for (direction, dx, dy) in [
            (RevealDirection::Up, 0.0, TRAVEL_ROWS),
            (RevealDirection::Down, 0.0, -TRAVEL_ROWS),
            (RevealDirection::Left, TRAVEL_COLS, 0.0),
            (RevealDirection::Right, -TRAVEL_COLS, 0.0),
        ] {
            let reveal = Reveal::new(RevealConfig::default().with_direction(direction));
            let style = reveal.style(Instant::now());
            assert_eq!((style.dx, style.dy), (dx, dy), "{:?}", direction);
        }
    }

    #[test]
    fn test_delay_holds_start_style() {
        let base = Instant::now();
        let config = RevealConfig::default().with_delay(Duration::from_millis(400));
        let mut reveal = Reveal::new(config);
        reveal.set_in_view(true, base);

        let held = reveal.style(at(base, 200));
        assert_eq!(held.opacity, 0.0);
        assert!(reveal.is_animating(at(base, 200)));
    }

    #[test]
    fn test_instant_config_skips_transition() {
        let base = Instant::now();
        let mut reveal = Reveal::new(RevealConfig::default().instant());
        reveal.set_in_view(true, base);
        let style = reveal.style(base + Duration::from_millis(1));
        assert_eq!(style.opacity, 1.0);
    }
}
