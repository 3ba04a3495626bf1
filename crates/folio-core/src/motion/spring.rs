//! Damped spring integrator used wherever motion should chase a target
//! rather than snap to it (magnet displacement, cursor follow, marquee
//! velocity smoothing).

/// Below this distance and speed the spring snaps to its target.
const SETTLE_THRESHOLD: f64 = 0.005;

/// Integration substep ceiling; large frame gaps are split so stiff
/// springs stay stable under semi-implicit Euler.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

/// A spring-animated scalar.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
            mass: mass.max(1e-6),
        }
    }

    /// Place the spring at `value` with no motion and no pending target.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.velocity = 0.0;
        self.target = value;
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < SETTLE_THRESHOLD
            && self.velocity.abs() < SETTLE_THRESHOLD
    }

    /// Advance the spring by `dt` seconds. Returns true while still moving.
    pub fn update(&mut self, dt: f64) -> bool {
        if dt <= 0.0 {
            return !self.is_settled();
        }

        let mut remaining = dt.min(0.25);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let force = -self.stiffness * (self.position - self.target)
                - self.damping * self.velocity;
            self.velocity += (force / self.mass) * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, secs: f64) {
        let steps = (secs / 0.016).ceil() as usize;
        for _ in 0..steps {
            spring.update(0.016);
        }
    }

    #[test]
    fn test_spring_reaches_target() {
        let mut spring = Spring::new(350.0, 15.0, 0.1);
        spring.set_target(5.0);
        run(&mut spring, 2.0);
        assert!((spring.value() - 5.0).abs() < 0.01);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_settles_and_reports_done() {
        let mut spring = Spring::new(400.0, 50.0, 1.0);
        spring.set_target(1.0);
        let mut moving = true;
        for _ in 0..1000 {
            moving = spring.update(0.016);
            if !moving {
                break;
            }
        }
        assert!(!moving);
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_snap_to_clears_motion() {
        let mut spring = Spring::new(350.0, 15.0, 0.1);
        spring.set_target(10.0);
        spring.update(0.016);
        spring.snap_to(0.0);
        assert_eq!(spring.value(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_large_frame_gap_stays_stable() {
        let mut spring = Spring::new(350.0, 15.0, 0.1);
        spring.set_target(3.0);
        // A single quarter-second gap must not diverge.
        spring.update(0.25);
        assert!(spring.value().abs() < 10.0);
        run(&mut spring, 2.0);
        assert!((spring.value() - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut spring = Spring::new(350.0, 15.0, 0.1);
        spring.set_target(1.0);
        let before = spring.value();
        spring.update(0.0);
        assert_eq!(spring.value(), before);
    }
}
