use ratatui::style::Color;

/// Runtime palette with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Accent gradient
    pub accent: Color,
    pub accent_warm: Color,

    // Semantic colors
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::light::palette()
    }
}

/// Linear blend between two colors, t in [0, 1].
///
/// Non-RGB colors cannot be mixed; they switch over at the midpoint.
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (x as f64 + (y as f64 - x as f64) * t).round() as u8
            };
            Color::Rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
        }
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

/// Fade a foreground toward the background; opacity 1.0 is fully drawn.
#[inline]
pub fn fade(bg: Color, fg: Color, opacity: f64) -> Color {
    blend(bg, fg, opacity)
}

impl Theme {
    /// Crossfade toward another palette.
    pub fn blended(&self, other: &Theme, t: f64) -> Theme {
        Theme {
            bg0: blend(self.bg0, other.bg0, t),
            bg1: blend(self.bg1, other.bg1, t),
            bg2: blend(self.bg2, other.bg2, t),
            fg0: blend(self.fg0, other.fg0, t),
            fg1: blend(self.fg1, other.fg1, t),
            muted: blend(self.muted, other.muted, t),
            accent: blend(self.accent, other.accent, t),
            accent_warm: blend(self.accent_warm, other.accent_warm, t),
            selection: blend(self.selection, other.selection, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_clamps_t() {
        let a = Color::Rgb(10, 10, 10);
        let b = Color::Rgb(20, 20, 20);
        assert_eq!(blend(a, b, -1.0), a);
        assert_eq!(blend(a, b, 2.0), b);
    }

    #[test]
    fn test_non_rgb_switches_at_midpoint() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.4), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.6), Color::Blue);
    }

    #[test]
    fn test_palette_crossfade() {
        let light = crate::themes::light::palette();
        let dark = crate::themes::dark::palette();
        let start = light.blended(&dark, 0.0);
        let end = light.blended(&dark, 1.0);
        assert_eq!(start.bg0, light.bg0);
        assert_eq!(end.bg0, dark.bg0);
    }
}
