//! Vertical layout of the page: section tops and heights in rows, plus
//! per-card slots for the work grid. Recomputed on resize and whenever
//! the active filter changes the card count.

use folio_core::motion::sections::SectionBounds;
use folio_core::Section;

/// Rows reserved for the fixed navigation header.
pub const NAVBAR_ROWS: u16 = 3;
/// Rows reserved for the status bar.
pub const STATUS_ROWS: u16 = 1;
/// Bias added to the scroll position when resolving the active section,
/// compensating for the fixed header.
pub const HEADER_OFFSET: f64 = 3.0;

/// Rows of the marquee band between hero and work.
pub const MARQUEE_ROWS: u16 = 3;
/// Rows of one work card.
pub const CARD_ROWS: u16 = 9;
/// Blank rows between card rows.
const CARD_GAP: u16 = 1;
/// Rows of the work section intro (title + filter tabs).
const WORK_HEADER_ROWS: u16 = 6;
/// Two-column grid needs at least this many columns.
const TWO_COLUMN_MIN_WIDTH: u16 = 90;

const ABOUT_ROWS: u16 = 16;
const CONTACT_ROWS: u16 = 14;

/// Placement of one card in the page, in absolute page rows/columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    /// Index into the *filtered* work list
    pub index: usize,
    pub top: f64,
    pub height: f64,
    pub left: u16,
    pub width: u16,
}

/// Resolved page geometry for one content-area size.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub hero: SectionBounds,
    pub marquee: SectionBounds,
    pub work: SectionBounds,
    pub about: SectionBounds,
    pub contact: SectionBounds,
    pub cards: Vec<CardSlot>,
    pub total_height: f64,
}

impl PageLayout {
    /// Lay the page out for a content area of `width` x `height` with
    /// `card_count` visible work cards.
    pub fn compute(width: u16, height: u16, card_count: usize) -> Self {
        let width = width.max(20);
        let height = height.max(10);

        let columns: u16 = if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let card_width = (width - 2 * (columns + 1)) / columns;

        let hero_height = height.max(18) as f64;
        let hero = SectionBounds::new(0.0, hero_height);

        let marquee = SectionBounds::new(hero.top + hero.height, MARQUEE_ROWS as f64);

        let work_top = marquee.top + marquee.height;
        let card_rows = card_count.div_ceil(columns as usize) as u16;
        let grid_height = card_rows * (CARD_ROWS + CARD_GAP);
        let work_height = (WORK_HEADER_ROWS + grid_height + 2) as f64;
        let work = SectionBounds::new(work_top, work_height);

        let mut cards = Vec::with_capacity(card_count);
        for index in 0..card_count {
            let row = (index as u16) / columns;
            let col = (index as u16) % columns;
            cards.push(CardSlot {
                index,
                top: work_top + (WORK_HEADER_ROWS + row * (CARD_ROWS + CARD_GAP)) as f64,
                height: CARD_ROWS as f64,
                left: 2 + col * (card_width + 2),
                width: card_width,
            });
        }

        let about = SectionBounds::new(work.top + work.height, ABOUT_ROWS as f64);
        let contact = SectionBounds::new(about.top + about.height, CONTACT_ROWS as f64);
        let total_height = contact.top + contact.height;

        Self {
            width,
            height,
            hero,
            marquee,
            work,
            about,
            contact,
            cards,
            total_height,
        }
    }

    pub fn section(&self, section: Section) -> SectionBounds {
        match section {
            Section::Home => self.hero,
            Section::Work => self.work,
            Section::About => self.about,
            Section::Contact => self.contact,
        }
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.total_height - self.height as f64).max(0.0)
    }

    /// Does the band `[top, top+height)` intersect the viewport at
    /// `scroll`, inset by `margin` rows?
    pub fn in_view(&self, top: f64, height: f64, scroll: f64, margin: f64) -> bool {
        let view_top = scroll + margin;
        let view_bottom = scroll + self.height as f64 - margin;
        top < view_bottom && top + height > view_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous() {
        let layout = PageLayout::compute(100, 30, 6);
        assert_eq!(layout.hero.top, 0.0);
        assert_eq!(layout.marquee.top, layout.hero.top + layout.hero.height);
        assert_eq!(layout.work.top, layout.marquee.top + layout.marquee.height);
        assert_eq!(layout.about.top, layout.work.top + layout.work.height);
        assert_eq!(layout.contact.top, layout.about.top + layout.about.height);
        assert_eq!(
            layout.total_height,
            layout.contact.top + layout.contact.height
        );
    }

    #[test]
    fn test_two_columns_on_wide_terminals() {
        let wide = PageLayout::compute(100, 30, 6);
        assert_eq!(wide.cards.len(), 6);
        // Cards 0 and 1 share a row in two columns.
        assert_eq!(wide.cards[0].top, wide.cards[1].top);
        assert_ne!(wide.cards[0].left, wide.cards[1].left);

        let narrow = PageLayout::compute(60, 30, 6);
        assert_ne!(narrow.cards[0].top, narrow.cards[1].top);
    }

    #[test]
    fn test_filter_changes_height() {
        let all = PageLayout::compute(100, 30, 6);
        let two = PageLayout::compute(100, 30, 2);
        assert!(two.total_height < all.total_height);
        assert_eq!(two.cards.len(), 2);
    }

    #[test]
    fn test_max_scroll_nonnegative() {
        let layout = PageLayout::compute(100, 200, 0);
        assert!(layout.max_scroll() >= 0.0);
    }

    #[test]
    fn test_in_view_respects_margin() {
        let layout = PageLayout::compute(100, 30, 6);
        // A band sitting exactly at the viewport bottom edge is outside
        // once the margin inset is applied.
        assert!(layout.in_view(10.0, 5.0, 0.0, 0.0));
        assert!(!layout.in_view(29.0, 5.0, 0.0, 4.0));
        assert!(layout.in_view(24.0, 5.0, 0.0, 4.0));
    }

    #[test]
    fn test_tiny_terminal_clamped() {
        let layout = PageLayout::compute(5, 3, 6);
        assert!(layout.width >= 20);
        assert!(layout.height >= 10);
    }
}
