//! Hero section: staggered headline, lede, call to action, scroll hint.

use std::time::Instant;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::theme::{blend, fade, Theme};

use super::{apply_reveal, blank_line, fit, pad_to_width, wrap_text};

const LEDE: &str = "I'm a designer and creative developer crafting distinctive digital \
experiences that stand out through refined aesthetics and thoughtful interactions.";

const LEFT_PAD: usize = 4;

/// Which headline row a word lands on: "Distinctive" / "design that" /
/// "stands out."
fn headline_row(word: usize) -> usize {
    match word {
        0 => 0,
        1 | 2 => 1,
        _ => 2,
    }
}

pub struct HeroWidget;

impl HeroWidget {
    pub fn lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let height = app.layout.hero.height as usize;
        let bg = theme.bg0;

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
        for _ in 0..height / 6 {
            lines.push(blank_line(width, bg));
        }

        lines.extend(Self::headline_lines(app, theme, now));
        lines.push(blank_line(width, bg));

        // Lede paragraph, revealed as one block.
        let lede_width = (width as usize).saturating_sub(LEFT_PAD * 2).min(64);
        let lede_lines: Vec<Line<'static>> = wrap_text(LEDE, lede_width)
            .into_iter()
            .map(|text| {
                let mut line = Line::from(vec![
                    Span::styled(" ".repeat(LEFT_PAD), Style::default().bg(bg)),
                    Span::styled(text, Style::default().fg(theme.muted).bg(bg)),
                ]);
                pad_to_width(&mut line, width, bg);
                line
            })
            .collect();
        let lede_height = lede_lines.len() + 1;
        lines.extend(apply_reveal(
            lede_lines,
            app.hero_lede.style(now),
            lede_height,
            width,
            bg,
        ));

        // Call to action.
        let mut cta = Line::from(vec![
            Span::styled(" ".repeat(LEFT_PAD), Style::default().bg(bg)),
            Span::styled(
                " View Work → ".to_string(),
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        pad_to_width(&mut cta, width, bg);
        lines.extend(apply_reveal(vec![cta], app.hero_cta.style(now), 2, width, bg));

        // Fill, leaving the last row for the scroll hint.
        let mut lines = fit(lines, height.saturating_sub(1), width, bg);
        let hint_opacity = app.hero_hint.style(now).opacity;
        let hint = "Scroll to explore ↓";
        let pad = (width as usize).saturating_sub(hint.chars().count()) / 2;
        let mut hint_line = Line::from(vec![
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled(
                hint.to_string(),
                Style::default().fg(fade(bg, theme.muted, hint_opacity)).bg(bg),
            ),
        ]);
        pad_to_width(&mut hint_line, width, bg);
        lines.push(hint_line);

        lines
    }

    /// Three headline rows built from the staggered glyph styles; the last
    /// row carries the accent gradient.
    fn headline_lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let bg = theme.bg0;
        let styles = app.hero_title.styles(now);

        let mut rows: Vec<Vec<Span<'static>>> = vec![
            vec![Span::styled(" ".repeat(LEFT_PAD), Style::default().bg(bg))],
            vec![Span::styled(" ".repeat(LEFT_PAD), Style::default().bg(bg))],
            vec![Span::styled(" ".repeat(LEFT_PAD), Style::default().bg(bg))],
        ];

        // Count glyphs per row first so the gradient can span its row.
        let mut word = 0usize;
        let mut row_len = [0usize; 3];
        for style in &styles {
            if style.ch.is_whitespace() {
                word += 1;
                if headline_row(word) == headline_row(word - 1) {
                    row_len[headline_row(word)] += 1;
                }
                continue;
            }
            row_len[headline_row(word)] += 1;
        }

        let mut word = 0usize;
        let mut col = [0usize; 3];
        for style in &styles {
            if style.ch.is_whitespace() {
                word += 1;
                // Word gaps survive within a row; row breaks swallow them.
                if headline_row(word) != headline_row(word - 1) {
                    continue;
                }
            }
            let row = headline_row(word);
            let base: Color = if row == 2 {
                let t = if row_len[row] > 1 {
                    col[row] as f64 / (row_len[row] - 1) as f64
                } else {
                    0.0
                };
                blend(theme.accent, theme.accent_warm, t)
            } else {
                theme.fg0
            };
            rows[row].push(Span::styled(
                style.ch.to_string(),
                Style::default()
                    .fg(fade(bg, base, style.progress))
                    .bg(bg)
                    .add_modifier(if row == 2 {
                        Modifier::BOLD | Modifier::ITALIC
                    } else {
                        Modifier::BOLD
                    }),
            ));
            col[row] += 1;
        }

        rows.into_iter()
            .map(|spans| {
                let mut line = Line::from(spans);
                pad_to_width(&mut line, width, bg);
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{content, AppConfig};
    use std::sync::Arc;

    fn app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), content::builtin_work());
        app.on_resize(100, 30);
        app
    }

    #[test]
    fn test_hero_emits_exact_height() {
        let app = app();
        let now = Instant::now();
        let theme = app.palette(now);
        let lines = HeroWidget::lines(&app, &theme, now);
        assert_eq!(lines.len(), app.layout.hero.height as usize);
    }

    #[test]
    fn test_headline_text_preserved_across_rows() {
        let mut app = app();
        let now = Instant::now();
        app.on_tick(now);
        let theme = app.palette(now);
        let rows = HeroWidget::headline_lines(&app, &theme, now);

        let joined: String = rows
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, crate::app::HERO_TITLE);
    }
}
