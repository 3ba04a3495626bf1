//! About section, rendered as a raised band.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::theme::Theme;

use super::{apply_reveal, blank_line, pad_to_width, wrap_text};

const BIO: &str = "I'm a designer and creative developer with a focus on brand systems, \
interactive work, and motion. I care about the details that make digital products feel \
considered.";

const EXPERIENCE: &str = "With over 8 years of experience, I've collaborated with brands \
and studios around the world, from early-stage products to established identities.";

const CAPABILITIES: &str =
    "Art Direction · Brand Identity · Digital Design · Interaction · Motion";

pub struct AboutWidget;

impl AboutWidget {
    pub fn lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let height = app.layout.about.height as usize;
        let bg = theme.bg1;
        let text_width = (width as usize).saturating_sub(8).min(70);

        let mut lines = Vec::with_capacity(height);
        lines.push(blank_line(width, bg));

        let mut title = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                "About",
                Style::default()
                    .fg(theme.fg0)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  03", Style::default().fg(theme.muted).bg(bg)),
        ]);
        pad_to_width(&mut title, width, bg);
        lines.push(title);
        lines.push(blank_line(width, bg));

        for paragraph in [BIO, EXPERIENCE] {
            for text in wrap_text(paragraph, text_width) {
                let mut line = Line::from(vec![
                    Span::styled("  ", Style::default().bg(bg)),
                    Span::styled(text, Style::default().fg(theme.fg1).bg(bg)),
                ]);
                pad_to_width(&mut line, width, bg);
                lines.push(line);
            }
            lines.push(blank_line(width, bg));
        }

        let mut caps = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                "Capabilities — ",
                Style::default().fg(theme.muted).bg(bg),
            ),
            Span::styled(
                CAPABILITIES.to_string(),
                Style::default().fg(theme.accent).bg(bg),
            ),
        ]);
        pad_to_width(&mut caps, width, bg);
        lines.push(caps);

        apply_reveal(lines, app.about_body.style(now), height, width, bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{content, AppConfig};
    use std::sync::Arc;

    #[test]
    fn test_about_emits_exact_height() {
        let mut app = App::new(Arc::new(AppConfig::default()), content::builtin_work());
        app.on_resize(100, 30);
        let now = Instant::now();
        let theme = app.palette(now);
        let lines = AboutWidget::lines(&app, &theme, now);
        assert_eq!(lines.len(), app.layout.about.height as usize);
    }
}
