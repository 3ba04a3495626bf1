//! Fixed navigation header: brand, section links, magnetic theme toggle.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::motion::magnet::Bounds;
use folio_core::{Section, ThemeMode};

use crate::app::App;
use crate::layout::NAVBAR_ROWS;

use super::{blank_line, pad_to_width};

/// Column range of one nav label on the middle navbar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    pub section: Section,
    pub start: u16,
    pub end: u16,
}

fn toggle_x(width: u16) -> u16 {
    width.saturating_sub(6)
}

/// The theme toggle's resting bounds, for magnet and click hit-testing.
pub fn toggle_bounds(width: u16) -> Bounds {
    Bounds::new(toggle_x(width) as f64, 1.0, 3.0, 1.0)
}

/// Nav label positions, right-aligned ahead of the toggle.
pub fn nav_slots(width: u16) -> Vec<NavSlot> {
    let labels: Vec<&str> = Section::ALL.iter().map(|s| s.nav_label()).collect();
    let total: u16 =
        labels.iter().map(|l| l.len() as u16).sum::<u16>() + 2 * (labels.len() as u16 - 1);
    let mut x = toggle_x(width).saturating_sub(total + 4);

    Section::ALL
        .iter()
        .map(|section| {
            let len = section.nav_label().len() as u16;
            let slot = NavSlot {
                section: *section,
                start: x,
                end: x + len,
            };
            x += len + 2;
            slot
        })
        .collect()
}

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = app.palette(now);
        let width = area.width;
        let active = app.tracker.active();

        let mut middle = Line::from(vec![
            Span::styled("  ", Style::default().bg(theme.bg0)),
            Span::styled(
                "ALEX KIM",
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.bg0)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let slots = nav_slots(width);
        let mut col: u16 = 10;
        for slot in &slots {
            if slot.start > col {
                middle.spans.push(Span::styled(
                    " ".repeat((slot.start - col) as usize),
                    Style::default().bg(theme.bg0),
                ));
            }
            let style = if slot.section == active {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg0)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted).bg(theme.bg0)
            };
            middle
                .spans
                .push(Span::styled(slot.section.nav_label().to_string(), style));
            col = slot.end.max(col);
        }
        pad_to_width(&mut middle, width, theme.bg0);

        let rule = Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(theme.bg1).bg(theme.bg0),
        ));

        let lines = vec![blank_line(width, theme.bg0), middle, rule];
        frame.render_widget(Paragraph::new(lines), area);

        Self::render_toggle(frame, area, app, now);
    }

    /// The toggle is drawn separately so the magnet displacement can move
    /// it off its resting cell.
    fn render_toggle(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = app.palette(now);
        let (dx, dy) = app.magnet.displacement();

        let rest_x = toggle_x(area.width) as i32;
        let x = (rest_x + dx.round() as i32).clamp(0, area.width.saturating_sub(3) as i32);
        let y = (1 + dy.round() as i32).clamp(0, NAVBAR_ROWS as i32 - 2);

        let icon = match app.theme_store.mode() {
            ThemeMode::Light => "◐",
            ThemeMode::Dark => "◑",
        };
        // Pulse highlights the toggle for the length of the crossfade.
        let fg = if app.pulse.is_active() {
            theme.accent
        } else {
            theme.fg0
        };

        let toggle = Line::from(vec![
            Span::styled("[", Style::default().fg(theme.muted).bg(theme.bg0)),
            Span::styled(icon.to_string(), Style::default().fg(fg).bg(theme.bg0)),
            Span::styled("]", Style::default().fg(theme.muted).bg(theme.bg0)),
        ]);
        let rect = Rect::new(area.x + x as u16, area.y + y as u16, 3, 1);
        frame.render_widget(Paragraph::new(toggle), rect);
    }
}
