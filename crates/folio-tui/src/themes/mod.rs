//! Palette loader with user color overrides.

pub mod dark;
pub mod light;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use folio_core::ThemeMode;
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse a CSS-style hex color ("#RRGGBB" or the short "#RGB", hash
/// optional) into a ratatui Color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    // Short form doubles each nibble: "f50" reads as "ff5500".
    let expanded;
    let digits = match digits.len() {
        6 => digits,
        3 => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            &expanded
        }
        _ => return None,
    };

    let rgb = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

/// Load the palette for a mode, applying any user overrides.
pub fn load_theme(mode: ThemeMode, config: &ThemeConfig) -> Theme {
    let base = match mode {
        ThemeMode::Light => light::palette(),
        ThemeMode::Dark => dark::palette(),
    };
    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base palette
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    if let Some(ref hex) = overrides.bg0 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg0 = color;
        }
    }
    if let Some(ref hex) = overrides.bg1 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg1 = color;
        }
    }
    if let Some(ref hex) = overrides.bg2 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg2 = color;
        }
    }
    if let Some(ref hex) = overrides.fg0 {
        if let Some(color) = parse_hex_color(hex) {
            theme.fg0 = color;
        }
    }
    if let Some(ref hex) = overrides.fg1 {
        if let Some(color) = parse_hex_color(hex) {
            theme.fg1 = color;
        }
    }
    if let Some(ref hex) = overrides.muted {
        if let Some(color) = parse_hex_color(hex) {
            theme.muted = color;
        }
    }
    if let Some(ref hex) = overrides.accent {
        if let Some(color) = parse_hex_color(hex) {
            theme.accent = color;
        }
    }
    if let Some(ref hex) = overrides.accent_warm {
        if let Some(color) = parse_hex_color(hex) {
            theme.accent_warm = color;
        }
    }
    if let Some(ref hex) = overrides.selection {
        if let Some(color) = parse_hex_color(hex) {
            theme.selection = color;
        }
    }
    theme
}
