//! Easing curves for the reveal and scroll transitions.
//!
//! Everything here is an ease-out: motion launches fast and brakes into
//! rest, which is how the page's transitions read. `apply` maps linear
//! progress to eased progress, both in [0, 1].

use serde::{Deserialize, Serialize};

/// Easing curve selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Hold the start value, then jump on completion
    None,
    Linear,
    /// Gentle ease-out, the scroll default
    Cubic,
    /// Hard ease-out, the reveal default
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl Easing {
    /// Map linear progress to eased progress.
    ///
    /// Input outside [0, 1] is clamped first, so a caller may hand in a
    /// raw elapsed/duration ratio without guarding the overshoot.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::None if t < 1.0 => 0.0,
            Self::None => 1.0,
            Self::Linear => t,
            // 1 - (1-t)^n; a higher power brakes harder near the end.
            Self::Cubic => 1.0 - (1.0 - t).powi(3),
            Self::Quintic => 1.0 - (1.0 - t).powi(5),
            // Halves the remaining distance every tenth of the window.
            Self::EaseOut if t < 1.0 => 1.0 - (-10.0 * t).exp2(),
            Self::EaseOut => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::motion::timing::progress;

    #[test]
    fn test_endpoints_pinned() {
        // Every curve starts at the rest offset and lands exactly on target.
        for easing in [Easing::Linear, Easing::Cubic, Easing::Quintic] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
        assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
        assert_eq!(Easing::None.apply(0.999), 0.0);
        assert_eq!(Easing::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_quintic_front_loads_the_reveal() {
        // Halfway through a reveal the quintic curve has already covered
        // ~97% of the travel; that is what makes the enter feel snappy.
        let mid = Easing::Quintic.apply(0.5);
        assert!(mid > 0.95 && mid < 1.0);

        // It stays ahead of the gentler scroll curve inside the window.
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Easing::Quintic.apply(t) > Easing::Cubic.apply(t), "t={}", t);
        }
    }

    #[test]
    fn test_cubic_decelerates() {
        // The scroll default covers more ground in the first half of the
        // animation than in the second.
        let first_half = Easing::Cubic.apply(0.5);
        assert!(first_half > 1.0 - first_half);
    }

    #[test]
    fn test_eased_timing_progress() {
        // The reveal call shape: easing applied to a timing ratio. An
        // ease-out leads linear progress mid-flight.
        let start = Instant::now();
        let now = start + Duration::from_millis(250);
        let t = progress(start, now, Duration::ZERO, Duration::from_millis(500));
        for easing in [Easing::Cubic, Easing::Quintic, Easing::EaseOut] {
            assert!(easing.apply(t) > t, "{:?}", easing);
        }
    }

    #[test]
    fn test_overshoot_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Quintic.apply(1.5), 1.0);
        assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_config_names_parse() {
        #[derive(Deserialize)]
        struct Probe {
            easing: Easing,
        }

        let probe: Probe = toml::from_str(r#"easing = "quintic""#).unwrap();
        assert_eq!(probe.easing, Easing::Quintic);
        let probe: Probe = toml::from_str(r#"easing = "easeout""#).unwrap();
        assert_eq!(probe.easing, Easing::EaseOut);
        assert!(toml::from_str::<Probe>(r#"easing = "bounce""#).is_err());
    }
}
