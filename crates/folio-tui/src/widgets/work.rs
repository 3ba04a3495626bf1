//! Work section: filter tabs and the revealed card grid.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::motion::parallax::viewport_progress;
use folio_core::WorkItem;

use crate::app::App;
use crate::layout::{CardSlot, CARD_ROWS};
use crate::theme::{blend, Theme};
use crate::themes::parse_hex_color;

use super::{apply_reveal, blank_line, fit, pad_to_width};

const ART_PATTERN: [char; 6] = ['▂', '▄', '▆', '█', '▆', '▄'];

pub struct WorkWidget;

impl WorkWidget {
    pub fn lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let height = app.layout.work.height as usize;
        let bg = theme.bg0;

        let mut lines = Vec::with_capacity(height);
        lines.push(blank_line(width, bg));
        lines.extend(Self::header_lines(app, theme, now));

        let filtered = app.filtered();
        let indices = app.filtered_indices();
        let work_top = app.layout.work.top;
        let scroll = app.scroll.current();
        let viewport = app.layout.height as f64;

        // Cards are merged into page rows; slots sharing a top share rows.
        let mut slots = app.layout.cards.iter().peekable();
        while let Some(first) = slots.next() {
            let mut row_slots = vec![*first];
            while let Some(next) = slots.peek() {
                if next.top == first.top {
                    row_slots.push(**next);
                    slots.next();
                } else {
                    break;
                }
            }

            // Pre-render each card in the row.
            let rendered: Vec<(CardSlot, Vec<Line<'static>>)> = row_slots
                .iter()
                .filter_map(|slot| {
                    let item = *filtered.get(slot.index)?;
                    let original = *indices.get(slot.index)?;
                    let reveal = app.cards.get(original)?;
                    let progress =
                        viewport_progress(slot.top, slot.height, scroll, viewport);
                    let drift = app.parallax.offset(progress, ART_PATTERN.len() as f64);
                    let card = Self::card_lines(item, theme, slot.width, drift);
                    Some((
                        *slot,
                        apply_reveal(
                            card,
                            reveal.style(now),
                            CARD_ROWS as usize,
                            slot.width,
                            bg,
                        ),
                    ))
                })
                .collect();

            for row in 0..CARD_ROWS as usize {
                let mut line = Line::default();
                let mut col: u16 = 0;
                for (slot, card) in &rendered {
                    if slot.left > col {
                        line.spans.push(Span::styled(
                            " ".repeat((slot.left - col) as usize),
                            Style::default().bg(bg),
                        ));
                    }
                    line.spans.extend(card[row].spans.iter().cloned());
                    col = slot.left + slot.width;
                }
                pad_to_width(&mut line, width, bg);
                lines.push(line);
            }
            // Gap row below each card row.
            lines.push(blank_line(width, bg));
        }

        fit(lines, height, width, bg)
    }

    fn header_lines(app: &App, theme: &Theme, now: Instant) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let bg = theme.bg0;

        let mut title = Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                "Selected Work",
                Style::default()
                    .fg(theme.fg0)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  02", Style::default().fg(theme.muted).bg(bg)),
        ]);
        pad_to_width(&mut title, width, bg);

        let mut tabs = Line::from(Span::styled("  ", Style::default().bg(bg)));
        for (i, filter) in app.filters.iter().enumerate() {
            let style = if i == app.active_filter {
                Style::default()
                    .fg(theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted).bg(bg)
            };
            tabs.spans.push(Span::styled(filter.clone(), style));
            tabs.spans
                .push(Span::styled("  ", Style::default().bg(bg)));
        }
        pad_to_width(&mut tabs, width, bg);

        let header = vec![
            title,
            blank_line(width, bg),
            tabs,
            blank_line(width, bg),
            blank_line(width, bg),
        ];
        apply_reveal(header, app.work_header.style(now), 5, width, bg)
    }

    /// One card: accent art panel with parallax drift, then title,
    /// description, and category/year footer.
    fn card_lines(
        item: &WorkItem,
        theme: &Theme,
        width: u16,
        drift: f64,
    ) -> Vec<Line<'static>> {
        let accent = parse_hex_color(&item.accent).unwrap_or(theme.accent);
        let card_bg = theme.bg2;
        let art_fg = blend(card_bg, accent, 0.75);
        let shift = drift.round() as usize;

        let mut lines = Vec::with_capacity(CARD_ROWS as usize);
        lines.push(blank_line(width, card_bg));

        for row in 0..3usize {
            let art: String = (0..width.saturating_sub(4) as usize)
                .map(|col| ART_PATTERN[(col / 2 + row + shift) % ART_PATTERN.len()])
                .collect();
            let mut line = Line::from(vec![
                Span::styled("  ", Style::default().bg(card_bg)),
                Span::styled(art, Style::default().fg(art_fg).bg(card_bg)),
            ]);
            pad_to_width(&mut line, width, card_bg);
            lines.push(line);
        }

        lines.push(blank_line(width, card_bg));

        let mut title = Line::from(vec![
            Span::styled("  ", Style::default().bg(card_bg)),
            Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(theme.fg0)
                    .bg(card_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        pad_to_width(&mut title, width, card_bg);
        lines.push(title);

        let mut desc = Line::from(vec![
            Span::styled("  ", Style::default().bg(card_bg)),
            Span::styled(
                item.description.clone(),
                Style::default().fg(theme.fg1).bg(card_bg),
            ),
        ]);
        pad_to_width(&mut desc, width, card_bg);
        lines.push(desc);

        let mut meta = Line::from(vec![
            Span::styled("  ", Style::default().bg(card_bg)),
            Span::styled(
                format!("{} — {}", item.category, item.year),
                Style::default().fg(theme.muted).bg(card_bg),
            ),
        ]);
        pad_to_width(&mut meta, width, card_bg);
        lines.push(meta);

        lines.push(blank_line(width, card_bg));
        fit(lines, CARD_ROWS as usize, width, card_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use folio_core::{content, AppConfig};
    use std::sync::Arc;

    fn app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), content::builtin_work());
        app.on_resize(100, 30);
        app
    }

    #[test]
    fn test_work_emits_exact_height() {
        let app = app();
        let now = Instant::now();
        let theme = app.palette(now);
        let lines = WorkWidget::lines(&app, &theme, now);
        assert_eq!(lines.len(), app.layout.work.height as usize);
    }

    #[test]
    fn test_filtered_grid_shrinks() {
        let mut app = app();
        let now = Instant::now();
        let theme = app.palette(now);
        let all = WorkWidget::lines(&app, &theme, now).len();

        app.handle_action(Action::CycleFilter, now);
        let filtered = WorkWidget::lines(&app, &theme, now).len();
        assert!(filtered < all);
        assert_eq!(filtered, app.layout.work.height as usize);
    }

    #[test]
    fn test_card_lines_fixed_height() {
        let app = app();
        let theme = app.palette(Instant::now());
        let lines = WorkWidget::card_lines(&app.work[0], &theme, 40, 0.0);
        assert_eq!(lines.len(), CARD_ROWS as usize);
    }

    #[test]
    fn test_card_title_present() {
        let app = app();
        let theme = app.palette(Instant::now());
        let lines = WorkWidget::card_lines(&app.work[0], &theme, 40, 0.0);
        let text: String = lines[5]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Essence"));
    }
}
