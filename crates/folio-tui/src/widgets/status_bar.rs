use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = app.palette(now);

        let mode_str = match app.mode {
            Mode::Normal => app.tracker.active().nav_label(),
            Mode::Help => "HELP",
        };

        let max = app.layout.max_scroll();
        let percent = if max > 0.0 {
            (app.scroll.current() / max * 100.0).round() as u16
        } else {
            0
        };

        let status_text = format!(
            " {} | {} | filter: {} | {:>3}%",
            mode_str,
            app.theme_store.mode().as_str(),
            app.active_filter_name(),
            percent.min(100),
        );

        let help_hint = " q:quit j/k:scroll t:theme f:filter 1-4:sections ?:help ";
        let padding_len = area.width.saturating_sub(
            status_text.chars().count() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
