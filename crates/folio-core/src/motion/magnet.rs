//! Magnetic pointer-following: an element leans toward the pointer while
//! hovered and springs back to rest on exit.
//!
//! The target offset is pure arithmetic over the element's current bounds
//! (re-read on every movement). The rendered displacement chases that
//! target through a damped spring, so visually the element "chases" the
//! pointer instead of snapping.

use super::spring::Spring;

/// Element bounds in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Bounds grown by `margin` cells on every side.
    pub fn inflated(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }
}

/// Pointer magnet
#[derive(Debug, Clone)]
pub struct Magnet {
    strength: f64,
    target: (f64, f64),
    x: Spring,
    y: Spring,
}

impl Magnet {
    pub fn new(strength: f64) -> Self {
        Self::with_spring(strength, 350.0, 15.0, 0.1)
    }

    pub fn with_spring(strength: f64, stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            strength,
            target: (0.0, 0.0),
            x: Spring::new(stiffness, damping, mass),
            y: Spring::new(stiffness, damping, mass),
        }
    }

    /// Pointer moved within (or near) the element.
    ///
    /// `bounds` must be the element's current geometry; degenerate bounds
    /// are ignored so an unplaced element is a no-op, not a fault.
    pub fn pointer_move(&mut self, px: f64, py: f64, bounds: Bounds) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let (cx, cy) = bounds.center();
        let dx = ((px - cx) / (bounds.width / 2.0)) * self.strength;
        let dy = ((py - cy) / (bounds.height / 2.0)) * self.strength;
        self.target = (dx, dy);
        self.x.set_target(dx);
        self.y.set_target(dy);
    }

    /// Pointer left the element; the target offset resets to exactly zero.
    pub fn pointer_leave(&mut self) {
        self.target = (0.0, 0.0);
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// The raw proportional offset (the value the spring chases).
    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        self.target
    }

    /// The spring-smoothed displacement actually rendered.
    #[inline]
    pub fn displacement(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    /// Advance the chase springs. Returns true while still moving.
    pub fn update(&mut self, dt: f64) -> bool {
        let x_moving = self.x.update(dt);
        let y_moving = self.y.update(dt);
        x_moving || y_moving
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
