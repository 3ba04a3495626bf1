//! Maps the vertical scroll offset to the active navigation section.

use crate::content::Section;

/// Vertical extent of a laid-out section, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Active-section tracker.
///
/// On every scroll event the section list is scanned in priority order
/// and the first section whose `[top, top+height)` interval contains
/// `scroll + header_offset` becomes active. Sections without bounds yet
/// (not laid out) are skipped; if nothing matches, the previous selection
/// is retained.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    order: Vec<Section>,
    bounds: Vec<Option<SectionBounds>>,
    active: Section,
    header_offset: f64,
}

impl SectionTracker {
    pub fn new(order: Vec<Section>, header_offset: f64) -> Self {
        let active = order.first().copied().unwrap_or(Section::Home);
        let bounds = vec![None; order.len()];
        Self {
            order,
            bounds,
            active,
            header_offset,
        }
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Record (or clear) a section's laid-out bounds.
    pub fn set_bounds(&mut self, section: Section, bounds: Option<SectionBounds>) {
        if let Some(i) = self.order.iter().position(|s| *s == section) {
            self.bounds[i] = bounds;
        }
    }

    /// React to a scroll event; returns the (possibly unchanged) active
    /// section.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Section {
        let pos = scroll_y + self.header_offset;

        for (section, bounds) in self.order.iter().zip(self.bounds.iter()) {
            let Some(bounds) = bounds else { continue };
            if bounds.contains(pos) {
                if self.active != *section {
                    tracing::debug!(section = section.as_str(), "active section changed");
                    self.active = *section;
                }
                break;
            }
        }

        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        let mut t = SectionTracker::new(Section::ALL.to_vec(), 0.0);
        t.set_bounds(Section::Home, Some(SectionBounds::new(0.0, 100.0)));
        t.set_bounds(Section::Work, Some(SectionBounds::new(100.0, 200.0)));
        t.set_bounds(Section::About, Some(SectionBounds::new(300.0, 1e9)));
        t
    }

    #[test]
    fn test_selects_containing_section() {
        let mut t = tracker();
        assert_eq!(t.on_scroll(150.0), Section::Work);
        assert_eq!(t.on_scroll(350.0), Section::About);
        assert_eq!(t.on_scroll(0.0), Section::Home);
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut t = tracker();
        t.on_scroll(150.0);
        assert_eq!(t.on_scroll(-10.0), Section::Work);
        assert_eq!(t.active(), Section::Work);
    }

    #[test]
    fn test_boundary_is_half_open() {
        let mut t = tracker();
        // 100 is the first row of Work, not the last of Home.
        assert_eq!(t.on_scroll(100.0), Section::Work);
    }

    #[test]
    fn test_header_offset_biases_position() {
        let mut t = SectionTracker::new(Section::ALL.to_vec(), 10.0);
        t.set_bounds(Section::Home, Some(SectionBounds::new(0.0, 100.0)));
        t.set_bounds(Section::Work, Some(SectionBounds::new(100.0, 100.0)));
        // scroll 95 + offset 10 = 105, inside Work.
        assert_eq!(t.on_scroll(95.0), Section::Work);
    }

    #[test]
    fn test_unmounted_sections_skipped() {
        let mut t = SectionTracker::new(Section::ALL.to_vec(), 0.0);
        t.set_bounds(Section::About, Some(SectionBounds::new(0.0, 100.0)));
        // Home/Work have no bounds; About must win without errors.
        assert_eq!(t.on_scroll(50.0), Section::About);
    }

    #[test]
    fn test_initial_active_is_first() {
        let t = SectionTracker::new(Section::ALL.to_vec(), 0.0);
        assert_eq!(t.active(), Section::Home);
    }

    #[test]
    fn test_priority_order_wins_on_overlap() {
        let mut t = SectionTracker::new(Section::ALL.to_vec(), 0.0);
        t.set_bounds(Section::Home, Some(SectionBounds::new(0.0, 200.0)));
        t.set_bounds(Section::Work, Some(SectionBounds::new(100.0, 200.0)));
        assert_eq!(t.on_scroll(150.0), Section::Home);
    }
}
