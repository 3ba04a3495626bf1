//! Dark palette; same accents, inverted surfaces.

use ratatui::style::Color;

use crate::theme::Theme;

pub fn palette() -> Theme {
    Theme {
        bg0: Color::Rgb(0x11, 0x11, 0x11),
        bg1: Color::Rgb(0x1a, 0x1a, 0x1a),
        bg2: Color::Rgb(0x24, 0x24, 0x24),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf8),
        fg1: Color::Rgb(0xd6, 0xd6, 0xd6),
        muted: Color::Rgb(0x99, 0x99, 0x99),
        accent: Color::Rgb(0xff, 0x54, 0x70),
        accent_warm: Color::Rgb(0xff, 0x97, 0x70),
        selection: Color::Rgb(0xf8, 0xf8, 0xf8),
    }
}
