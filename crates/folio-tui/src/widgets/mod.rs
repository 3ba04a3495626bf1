pub mod about;
pub mod contact;
pub mod cursor;
pub mod help;
pub mod hero;
pub mod marquee;
pub mod navbar;
pub mod page;
pub mod status_bar;
pub mod work;

pub use cursor::CursorWidget;
pub use help::HelpWidget;
pub use navbar::NavBarWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::motion::reveal::RevealStyle;

use crate::theme::fade;

/// A full-width blank line on `bg`.
pub(crate) fn blank_line(width: u16, bg: Color) -> Line<'static> {
    Line::from(Span::styled(
        " ".repeat(width as usize),
        Style::default().bg(bg),
    ))
}

/// Pad a line with trailing spaces to exactly `width` columns.
pub(crate) fn pad_to_width(line: &mut Line<'static>, width: u16, bg: Color) {
    let used: usize = line.spans.iter().map(|s| s.content.width()).sum();
    if used < width as usize {
        line.spans.push(Span::styled(
            " ".repeat(width as usize - used),
            Style::default().bg(bg),
        ));
    }
}

/// Pad or truncate a block of lines to exactly `height` rows.
pub(crate) fn fit(mut lines: Vec<Line<'static>>, height: usize, width: u16, bg: Color) -> Vec<Line<'static>> {
    while lines.len() < height {
        lines.push(blank_line(width, bg));
    }
    lines.truncate(height);
    lines
}

/// Apply a reveal style to a block of lines.
///
/// Opacity fades every foreground toward the section background, the
/// vertical offset shifts rows by inserting/dropping blanks, and the
/// horizontal offset indents. The result is always exactly `height` rows.
pub(crate) fn apply_reveal(
    mut lines: Vec<Line<'static>>,
    style: RevealStyle,
    height: usize,
    width: u16,
    bg: Color,
) -> Vec<Line<'static>> {
    if style.opacity < 1.0 {
        for line in &mut lines {
            for span in &mut line.spans {
                if let Some(fg) = span.style.fg {
                    span.style.fg = Some(fade(bg, fg, style.opacity));
                }
            }
        }
    }

    let dx = style.dx.round();
    if dx > 0.0 {
        for line in &mut lines {
            line.spans.insert(
                0,
                Span::styled(" ".repeat(dx as usize), Style::default().bg(bg)),
            );
        }
    }

    let dy = style.dy.round() as i64;
    if dy > 0 {
        for _ in 0..dy {
            lines.insert(0, blank_line(width, bg));
        }
    } else if dy < 0 {
        let drop = ((-dy) as usize).min(lines.len());
        lines.drain(0..drop);
    }

    fit(lines, height, width, bg)
}

/// Greedy word wrap.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    ratatui::layout::Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::motion::reveal::RevealStyle;

    fn styled_line(text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Rgb(255, 255, 255)),
        ))
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        let bg = Color::Rgb(0, 0, 0);
        let lines = fit(vec![styled_line("a")], 3, 10, bg);
        assert_eq!(lines.len(), 3);
        let lines = fit(
            vec![styled_line("a"), styled_line("b"), styled_line("c")],
            2,
            10,
            bg,
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_apply_reveal_shifts_down() {
        let bg = Color::Rgb(0, 0, 0);
        let style = RevealStyle { opacity: 0.5, dx: 0.0, dy: 2.0 };
        let lines = apply_reveal(vec![styled_line("content")], style, 4, 10, bg);
        assert_eq!(lines.len(), 4);
        // Two blank rows precede the shifted content.
        assert!(lines[0].spans[0].content.trim().is_empty());
        assert!(lines[1].spans[0].content.trim().is_empty());
        assert_eq!(lines[2].spans[0].content.as_ref(), "content");
        // Faded halfway toward black.
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Rgb(128, 128, 128)));
    }

    #[test]
    fn test_apply_reveal_settled_is_identity_height() {
        let bg = Color::Rgb(0, 0, 0);
        let style = RevealStyle { opacity: 1.0, dx: 0.0, dy: 0.0 };
        let lines = apply_reveal(vec![styled_line("x")], style, 2, 10, bg);
        assert_eq!(lines[0].spans[0].content.as_ref(), "x");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(255, 255, 255)));
    }
}
