//! Parallax: element progress through the viewport mapped to a vertical
//! offset, giving card art a slower apparent scroll than the page.

/// Progress of an element through the viewport, in [0, 1].
///
/// 0.0 when the element's top reaches the viewport bottom, 1.0 when its
/// bottom leaves the viewport top. Degenerate geometry yields 0.0.
pub fn viewport_progress(top: f64, height: f64, scroll: f64, viewport: f64) -> f64 {
    let start = top - viewport;
    let end = top + height;
    let span = end - start;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll - start) / span).clamp(0.0, 1.0)
}

/// Parallax mapping with a fixed speed scalar.
#[derive(Debug, Clone, Copy)]
pub struct Parallax {
    speed: f64,
}

impl Parallax {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Row offset for an element of `height` rows at `progress`.
    pub fn offset(&self, progress: f64, height: f64) -> f64 {
        progress.clamp(0.0, 1.0) * self.speed * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        // Viewport 40 rows; element at row 100, 10 rows tall.
        // Top enters the bottom edge at scroll 60; bottom exits at 110.
        assert_eq!(viewport_progress(100.0, 10.0, 60.0, 40.0), 0.0);
        assert_eq!(viewport_progress(100.0, 10.0, 110.0, 40.0), 1.0);
        let mid = viewport_progress(100.0, 10.0, 85.0, 40.0);
        assert!((mid - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamped_outside() {
        assert_eq!(viewport_progress(100.0, 10.0, 0.0, 40.0), 0.0);
        assert_eq!(viewport_progress(100.0, 10.0, 500.0, 40.0), 1.0);
    }

    #[test]
    fn test_degenerate_geometry() {
        assert_eq!(viewport_progress(0.0, 0.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_offset_scales_with_speed_and_height() {
        let parallax = Parallax::new(0.5);
        assert_eq!(parallax.offset(0.0, 10.0), 0.0);
        assert_eq!(parallax.offset(1.0, 10.0), 5.0);
        assert_eq!(parallax.offset(0.5, 10.0), 2.5);
    }
}
