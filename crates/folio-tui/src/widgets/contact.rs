//! Contact section and page footer.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::theme::Theme;

use super::{apply_reveal, blank_line, fit, pad_to_width};

const EMAIL: &str = "hello@alexkim.studio";
const SOCIALS: &str = "GitHub · Dribbble · Instagram";
const FOOTER: &str = "© 2023 Alex Kim";

pub struct ContactWidget;

impl ContactWidget {
    pub fn lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let height = app.layout.contact.height as usize;
        let bg = theme.bg0;

        let mut lines = Vec::with_capacity(height);
        lines.push(blank_line(width, bg));

        let mut title = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                "Let's work together",
                Style::default()
                    .fg(theme.fg0)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  04", Style::default().fg(theme.muted).bg(bg)),
        ]);
        pad_to_width(&mut title, width, bg);
        lines.push(title);
        lines.push(blank_line(width, bg));

        let mut email = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                EMAIL.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        pad_to_width(&mut email, width, bg);
        lines.push(email);

        let mut socials = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(SOCIALS.to_string(), Style::default().fg(theme.muted).bg(bg)),
        ]);
        pad_to_width(&mut socials, width, bg);
        lines.push(socials);

        let mut lines = apply_reveal(
            lines,
            app.contact_body.style(now),
            height.saturating_sub(2),
            width,
            bg,
        );

        // Footer sits outside the reveal so the page always ends anchored.
        let rule = Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(theme.bg1).bg(bg),
        ));
        lines.push(rule);
        let pad = (width as usize).saturating_sub(FOOTER.chars().count()) / 2;
        let mut footer = Line::from(vec![
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled(FOOTER.to_string(), Style::default().fg(theme.muted).bg(bg)),
        ]);
        pad_to_width(&mut footer, width, bg);
        lines.push(footer);

        fit(lines, height, width, bg)
    }
}
