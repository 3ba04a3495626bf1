//! Composes the full page as one scrolled paragraph.

use std::time::Instant;

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::app::App;

use super::about::AboutWidget;
use super::contact::ContactWidget;
use super::hero::HeroWidget;
use super::marquee::MarqueeWidget;
use super::work::WorkWidget;

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = app.palette(now);

        let mut lines: Vec<Line<'static>> =
            Vec::with_capacity(app.layout.total_height as usize);
        lines.extend(HeroWidget::lines(app, &theme, now));
        lines.extend(MarqueeWidget::lines(app, &theme));
        lines.extend(WorkWidget::lines(app, &theme, now));
        lines.extend(AboutWidget::lines(app, &theme, now));
        lines.extend(ContactWidget::lines(app, &theme, now));

        let scroll = app.scroll.current().round().max(0.0) as u16;
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg0))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
