//! Custom cursor overlay: a spring-following glyph drawn over everything
//! else, with a label in the "text" variant.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CursorVariant};

pub struct CursorWidget;

impl CursorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        if !app.cursor.visible {
            return;
        }
        let theme = app.palette(now);

        let x = app.cursor.x.value().round();
        let y = app.cursor.y.value().round();
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= area.width || y >= area.height {
            return;
        }

        let glyph = match app.cursor.variant {
            CursorVariant::Default => "○",
            CursorVariant::Text => "●",
            CursorVariant::Project => "◆",
        };
        let color = app.cursor.accent.unwrap_or(theme.fg0);

        let rect = Rect::new(area.x + x, area.y + y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(color))),
            rect,
        );

        // The text variant carries its label beside the glyph.
        if app.cursor.variant == CursorVariant::Text && !app.cursor.label.is_empty() {
            let label_w = app.cursor.label.chars().count() as u16;
            if x + 2 + label_w <= area.width {
                let rect = Rect::new(area.x + x + 2, area.y + y, label_w, 1);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        app.cursor.label.clone(),
                        Style::default().fg(color),
                    ))),
                    rect,
                );
            }
        }
    }
}
