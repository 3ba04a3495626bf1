//! The auto-scrolling strip between hero and work.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::motion::marquee::MARQUEE_COPIES;

use crate::app::App;
use crate::theme::Theme;

use super::{blank_line, pad_to_width};

const PHRASE: &str = "DESIGN — DEVELOPMENT — DIRECTION — PHOTOGRAPHY — ";

pub struct MarqueeWidget;

impl MarqueeWidget {
    pub fn lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let bg = theme.bg1;

        // Four copies laid end to end; the wrapped offset in [-50, 0]
        // percent indexes into the first half, so the seam never shows.
        let strip: Vec<char> = PHRASE.repeat(MARQUEE_COPIES).chars().collect();
        let shift =
            ((-app.marquee.position() / 100.0) * strip.len() as f64).round() as usize;

        let visible: String = (0..width as usize)
            .map(|i| strip[(shift + i) % strip.len()])
            .collect();

        let mut line = Line::from(Span::styled(
            visible,
            Style::default()
                .fg(theme.fg1)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        pad_to_width(&mut line, width, bg);

        vec![blank_line(width, bg), line, blank_line(width, bg)]
    }
}
