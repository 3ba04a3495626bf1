//! Light palette, matching the page's paper tones.

use ratatui::style::Color;

use crate::theme::Theme;

pub fn palette() -> Theme {
    Theme {
        bg0: Color::Rgb(0xf8, 0xf8, 0xf8),
        bg1: Color::Rgb(0xf2, 0xf2, 0xf2),
        bg2: Color::Rgb(0xea, 0xea, 0xea),
        fg0: Color::Rgb(0x11, 0x11, 0x11),
        fg1: Color::Rgb(0x33, 0x33, 0x33),
        muted: Color::Rgb(0x55, 0x55, 0x55),
        accent: Color::Rgb(0xff, 0x54, 0x70),
        accent_warm: Color::Rgb(0xff, 0x97, 0x70),
        selection: Color::Rgb(0x11, 0x11, 0x11),
    }
}
