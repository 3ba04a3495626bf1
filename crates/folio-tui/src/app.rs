use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;

use folio_core::content::{self, WorkItem};
use folio_core::motion::magnet::Magnet;
use folio_core::motion::marquee::Marquee;
use folio_core::motion::parallax::Parallax;
use folio_core::motion::reveal::{Reveal, RevealConfig};
use folio_core::motion::scroll::PageScroll;
use folio_core::motion::sections::SectionTracker;
use folio_core::motion::spring::Spring;
use folio_core::motion::text_reveal::{TextReveal, TextRevealConfig};
use folio_core::motion::theme_watch::ThemePulse;
use folio_core::{AppConfig, Section, ThemeEvent, ThemeMode, ThemeStore};

use crate::input::Action;
use crate::layout::{PageLayout, HEADER_OFFSET, NAVBAR_ROWS, STATUS_ROWS};
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::widgets::navbar;

/// The hero headline; revealed glyph by glyph.
pub const HERO_TITLE: &str = "Distinctive design that stands out.";

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Custom cursor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVariant {
    /// Small ring following the pointer
    Default,
    /// Enlarged, carrying a label (nav items, headline)
    Text,
    /// Project-card hover
    Project,
}

/// Spring-following overlay cursor
pub struct CursorState {
    pub x: Spring,
    pub y: Spring,
    pub visible: bool,
    pub variant: CursorVariant,
    pub label: String,
    pub accent: Option<Color>,
}

impl CursorState {
    fn new() -> Self {
        // The page's cursor spring: stiffness 500, damping 28, mass 0.5.
        Self {
            x: Spring::new(500.0, 28.0, 0.5),
            y: Spring::new(500.0, 28.0, 0.5),
            visible: false,
            variant: CursorVariant::Default,
            label: String::new(),
            accent: None,
        }
    }

    fn set_default(&mut self) {
        self.variant = CursorVariant::Default;
        self.label.clear();
        self.accent = None;
    }

    fn set_text(&mut self, label: &str, accent: Option<Color>) {
        self.variant = CursorVariant::Text;
        self.label = label.to_string();
        self.accent = accent;
    }

    fn set_project(&mut self, accent: Option<Color>) {
        self.variant = CursorVariant::Project;
        self.label.clear();
        self.accent = accent;
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Full work list (unfiltered)
    pub work: Vec<WorkItem>,
    /// Filter tabs: "All" followed by the distinct categories
    pub filters: Vec<String>,
    /// Index into `filters`
    pub active_filter: usize,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,

    /// Theme flag owner; the only writer of the mode
    pub theme_store: ThemeStore,
    theme_rx: Receiver<ThemeEvent>,
    /// Transition pulse driving the palette crossfade
    pub pulse: ThemePulse,
    light: Theme,
    dark: Theme,

    /// Resolved page geometry for the current content area
    pub layout: PageLayout,
    pub scroll: PageScroll,
    pub tracker: SectionTracker,
    pub marquee: Marquee,
    /// Magnetic theme toggle in the header
    pub magnet: Magnet,
    pub parallax: Parallax,

    pub hero_title: TextReveal,
    pub hero_lede: Reveal,
    pub hero_cta: Reveal,
    pub hero_hint: Reveal,
    pub work_header: Reveal,
    /// One reveal per work item, parallel to `work`
    pub cards: Vec<Reveal>,
    pub about_body: Reveal,
    pub contact_body: Reveal,

    pub cursor: CursorState,
    /// Last pointer position in terminal coordinates
    pub mouse: Option<(u16, u16)>,
    last_tick: Option<Instant>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, work: Vec<WorkItem>) -> Self {
        let now = Instant::now();
        let reduced = config.motion.reduced_motion;

        let mut filters = vec!["All".to_string()];
        filters.extend(content::categories(&work));

        let initial_mode =
            ThemeMode::from_str(&config.ui.theme.name).unwrap_or(ThemeMode::Light);
        let mut theme_store = ThemeStore::new(initial_mode);
        let theme_rx = theme_store.subscribe();
        let mut pulse = ThemePulse::new();
        // Seed the pulse with the starting mode so the first real flip,
        // not startup, arms the crossfade.
        pulse.observe(ThemeEvent { mode: initial_mode }, now);

        let light = load_theme(ThemeMode::Light, &config.ui.theme);
        let dark = load_theme(ThemeMode::Dark, &config.ui.theme);

        let reveal_cfg = {
            let tuning = &config.motion.reveal;
            let base = RevealConfig {
                once: tuning.once,
                margin: tuning.margin_rows,
                delay: Duration::ZERO,
                duration: Duration::from_millis(tuning.duration_ms),
                direction: tuning.direction,
                ..RevealConfig::default()
            };
            if reduced {
                base.instant()
            } else {
                base
            }
        };
        let delayed = |ms: u64| -> RevealConfig {
            if reduced {
                reveal_cfg.clone().instant()
            } else {
                reveal_cfg.clone().with_delay(Duration::from_millis(ms))
            }
        };

        let text_cfg = {
            let base = TextRevealConfig {
                delay: Duration::from_millis(200),
                stagger: Duration::from_millis(config.motion.reveal.stagger_ms),
                ..TextRevealConfig::default()
            };
            if reduced {
                base.instant()
            } else {
                base
            }
        };

        let cards: Vec<Reveal> = (0..work.len())
            .map(|i| Reveal::new(delayed(100 * (i as u64 % 4))))
            .collect();

        let marquee_speed = if reduced {
            0.0
        } else {
            config.motion.marquee.speed
        };
        let marquee = Marquee::new(
            marquee_speed,
            config.motion.marquee.direction,
            config.motion.marquee.pause_on_hover,
        );

        let magnet = Magnet::with_spring(
            config.motion.magnet.strength,
            config.motion.magnet.stiffness,
            config.motion.magnet.damping,
            config.motion.magnet.mass,
        );

        let mut scroll_tuning = config.motion.scroll.clone();
        if reduced {
            scroll_tuning.smooth_enabled = false;
        }

        let filtered_count = work.len();
        let mut app = Self {
            work,
            filters,
            active_filter: 0,
            mode: Mode::Normal,
            should_quit: false,
            pending_key: None,
            theme_store,
            theme_rx,
            pulse,
            light,
            dark,
            layout: PageLayout::compute(80, 24, filtered_count),
            scroll: PageScroll::new(scroll_tuning),
            tracker: SectionTracker::new(Section::ALL.to_vec(), HEADER_OFFSET),
            marquee,
            magnet,
            parallax: Parallax::new(0.5),
            hero_title: TextReveal::new(HERO_TITLE, text_cfg),
            hero_lede: Reveal::new(delayed(400)),
            hero_cta: Reveal::new(delayed(600)),
            hero_hint: Reveal::new(delayed(1200)),
            work_header: Reveal::new(reveal_cfg.clone()),
            cards,
            about_body: Reveal::new(reveal_cfg.clone()),
            contact_body: Reveal::new(reveal_cfg),
            cursor: CursorState::new(),
            mouse: None,
            last_tick: None,
            config,
        };
        app.sync_tracker_bounds();
        app
    }

    /// Work items passing the active filter, in original order.
    pub fn filtered(&self) -> Vec<&WorkItem> {
        content::filter_work(&self.work, &self.filters[self.active_filter])
    }

    /// Original indices of the filtered items, for reveal lookup.
    pub fn filtered_indices(&self) -> Vec<usize> {
        let filter = &self.filters[self.active_filter];
        self.work
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                filter.eq_ignore_ascii_case("all")
                    || item.category.eq_ignore_ascii_case(filter)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn active_filter_name(&self) -> &str {
        &self.filters[self.active_filter]
    }

    /// Resize to a full terminal size; chrome rows are carved off here.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "terminal resized");
        let content_height = height.saturating_sub(NAVBAR_ROWS + STATUS_ROWS);
        self.recompute_layout(width, content_height);
    }

    fn recompute_layout(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(width, height, self.filtered().len());
        self.sync_tracker_bounds();
    }

    fn sync_tracker_bounds(&mut self) {
        for section in Section::ALL {
            self.tracker
                .set_bounds(section, Some(self.layout.section(section)));
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        let max = self.layout.max_scroll();
        let viewport = self.layout.height as f64;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_down(max),
            Action::ScrollUp => self.scroll.scroll_up(max),
            Action::ScrollHalfPageDown => self.scroll.half_page_down(viewport, max),
            Action::ScrollHalfPageUp => self.scroll.half_page_up(viewport, max),
            Action::ScrollPageDown => self.scroll.page_down(viewport, max),
            Action::ScrollPageUp => self.scroll.page_up(viewport, max),
            Action::JumpToTop => self.scroll.scroll_to(0.0, max, now),
            Action::JumpToBottom => self.scroll.scroll_to(max, max, now),
            Action::PendingG => {}
            Action::GoToSection(section) => self.go_to_section(section, now),
            Action::NextSection => self.step_section(1, now),
            Action::PrevSection => self.step_section(-1, now),
            Action::ToggleTheme => {
                self.theme_store.toggle();
            }
            Action::CycleFilter => {
                self.active_filter = (self.active_filter + 1) % self.filters.len();
                tracing::debug!(filter = %self.filters[self.active_filter], "work filter changed");
                self.recompute_layout(self.layout.width, self.layout.height);
            }
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }

        self.pending_key = if action == Action::PendingG {
            Some('g')
        } else {
            None
        };
    }

    pub fn go_to_section(&mut self, section: Section, now: Instant) {
        let top = self.layout.section(section).top;
        self.scroll.scroll_to(top, self.layout.max_scroll(), now);
    }

    fn step_section(&mut self, delta: i32, now: Instant) {
        let current = self.tracker.active().index() as i32;
        let next = (current + delta).clamp(0, Section::ALL.len() as i32 - 1) as usize;
        if let Some(section) = Section::from_index(next) {
            self.go_to_section(section, now);
        }
    }

    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.on_pointer(event.column, event.row);
            }
            MouseEventKind::ScrollDown => {
                let lines = self.config.motion.scroll.scroll_lines as f64;
                self.scroll.scroll_by(lines * 3.0, self.layout.max_scroll());
            }
            MouseEventKind::ScrollUp => {
                let lines = self.config.motion.scroll.scroll_lines as f64;
                self.scroll.scroll_by(-lines * 3.0, self.layout.max_scroll());
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_click(event.column, event.row, now);
            }
            _ => {}
        }
    }

    fn on_pointer(&mut self, col: u16, row: u16) {
        self.mouse = Some((col, row));
        self.cursor.visible = true;
        self.cursor.x.set_target(col as f64);
        self.cursor.y.set_target(row as f64);

        if row < NAVBAR_ROWS {
            self.marquee.set_hovered(false);
            self.pointer_over_navbar(col, row);
            return;
        }

        // Outside the header the magnet releases.
        self.magnet.pointer_leave();

        let page_y = (row - NAVBAR_ROWS) as f64 + self.scroll.current();

        let over_marquee = page_y >= self.layout.marquee.top
            && page_y < self.layout.marquee.top + self.layout.marquee.height;
        self.marquee.set_hovered(over_marquee);

        if let Some(slot) = self
            .layout
            .cards
            .iter()
            .find(|slot| {
                page_y >= slot.top
                    && page_y < slot.top + slot.height
                    && col >= slot.left
                    && col < slot.left + slot.width
            })
            .copied()
        {
            let indices = self.filtered_indices();
            let accent = indices
                .get(slot.index)
                .and_then(|&i| self.work.get(i))
                .and_then(|item| crate::themes::parse_hex_color(&item.accent));
            self.cursor.set_project(accent);
            return;
        }

        let hero_headline = page_y >= self.layout.hero.top + 2.0
            && page_y < self.layout.hero.top + self.layout.hero.height / 2.0;
        if hero_headline {
            self.cursor.set_text("Hello", None);
        } else {
            self.cursor.set_default();
        }
    }

    fn pointer_over_navbar(&mut self, col: u16, row: u16) {
        let toggle = navbar::toggle_bounds(self.layout.width);
        if toggle.inflated(2.0).contains(col as f64, row as f64) {
            self.magnet.pointer_move(col as f64, row as f64, toggle);
            self.cursor.set_text("Theme", None);
            return;
        }
        self.magnet.pointer_leave();

        let slot = navbar::nav_slots(self.layout.width)
            .into_iter()
            .find(|slot| row == 1 && col >= slot.start && col < slot.end);
        match slot {
            Some(slot) => {
                self.cursor.set_text(slot.section.nav_label(), None);
            }
            None => self.cursor.set_default(),
        }
    }

    fn on_click(&mut self, col: u16, row: u16, now: Instant) {
        if row < NAVBAR_ROWS {
            let toggle = navbar::toggle_bounds(self.layout.width);
            if toggle.inflated(1.0).contains(col as f64, row as f64) {
                self.theme_store.toggle();
                return;
            }
            if let Some(slot) = navbar::nav_slots(self.layout.width)
                .into_iter()
                .find(|slot| row == 1 && col >= slot.start && col < slot.end)
            {
                self.go_to_section(slot.section, now);
            }
        }
    }

    /// Advance every primitive by one frame.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or(Duration::from_millis(16));
        self.last_tick = Some(now);
        let dt_secs = dt.as_secs_f64();

        // Theme pulse consumes store events, then ages out.
        self.pulse.poll(&self.theme_rx, now);
        self.pulse.update(now);

        // Scroll first; the tracker and marquee feed off its outputs.
        let max = self.layout.max_scroll();
        let position = self.scroll.update(max, now);
        self.tracker.on_scroll(position);
        self.marquee.observe_scroll_velocity(self.scroll.velocity());
        self.marquee.advance(dt);

        self.magnet.update(dt_secs);
        self.cursor.x.update(dt_secs);
        self.cursor.y.update(dt_secs);

        self.update_reveals(position, now);
    }

    fn update_reveals(&mut self, scroll: f64, now: Instant) {
        let margin = self.config.motion.reveal.margin_rows as f64;
        let layout = &self.layout;

        let hero = layout.hero;
        let hero_in = layout.in_view(hero.top, hero.height, scroll, margin);
        if hero_in {
            self.hero_title.begin(now);
        }
        self.hero_lede.set_in_view(hero_in, now);
        self.hero_cta.set_in_view(hero_in, now);
        self.hero_hint.set_in_view(hero_in, now);

        let header_in = layout.in_view(layout.work.top, 6.0, scroll, margin);
        self.work_header.set_in_view(header_in, now);

        let indices = self.filtered_indices();
        for slot in &layout.cards {
            let Some(&original) = indices.get(slot.index) else { continue };
            let Some(reveal) = self.cards.get_mut(original) else { continue };
            let in_view = layout.in_view(slot.top, slot.height, scroll, margin);
            reveal.set_in_view(in_view, now);
        }

        let about = layout.about;
        self.about_body
            .set_in_view(layout.in_view(about.top, about.height, scroll, margin), now);
        let contact = layout.contact;
        self.contact_body
            .set_in_view(layout.in_view(contact.top, contact.height, scroll, margin), now);
    }

    /// Palette for this frame: the active mode, crossfaded from the
    /// previous one while a theme pulse is live.
    pub fn palette(&self, now: Instant) -> Theme {
        let of = |mode: ThemeMode| -> &Theme {
            match mode {
                ThemeMode::Light => &self.light,
                ThemeMode::Dark => &self.dark,
            }
        };
        let current = of(self.theme_store.mode());
        match self.pulse.from_mode() {
            Some(from) => of(from).blended(current, self.pulse.progress(now)),
            None => current.clone(),
        }
    }

    /// Whether anything is mid-animation; drives the poll timeout.
    pub fn is_animating(&self, now: Instant) -> bool {
        let marquee_visible = self.layout.in_view(
            self.layout.marquee.top,
            self.layout.marquee.height,
            self.scroll.current(),
            0.0,
        );
        if marquee_visible && !self.marquee.is_paused() {
            return true;
        }

        self.scroll.is_animating()
            || self.pulse.is_active()
            || !self.magnet.is_settled()
            || !self.cursor.x.is_settled()
            || !self.cursor.y.is_settled()
            || (self.hero_title.has_begun() && !self.hero_title.is_complete(now))
            || self.reveals_animating(now)
    }

    fn reveals_animating(&self, now: Instant) -> bool {
        self.hero_lede.is_animating(now)
            || self.hero_cta.is_animating(now)
            || self.hero_hint.is_animating(now)
            || self.work_header.is_animating(now)
            || self.about_body.is_animating(now)
            || self.contact_body.is_animating(now)
            || self.cards.iter().any(|r| r.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(
            Arc::new(AppConfig::default()),
            content::builtin_work(),
        );
        app.on_resize(100, 30);
        app
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_filter_cycle_recomputes_layout() {
        let mut app = app();
        let all_height = app.layout.total_height;
        let now = Instant::now();

        // "All" -> "Branding" (one card).
        app.handle_action(Action::CycleFilter, now);
        assert_eq!(app.active_filter_name(), "Branding");
        assert_eq!(app.filtered().len(), 1);
        assert!(app.layout.total_height < all_height);
    }

    #[test]
    fn test_filtered_indices_align_with_items() {
        let mut app = app();
        let now = Instant::now();
        // Cycle to "Digital": items horizon (1) and lucid (4).
        app.handle_action(Action::CycleFilter, now);
        app.handle_action(Action::CycleFilter, now);
        assert_eq!(app.active_filter_name(), "Digital");
        assert_eq!(app.filtered_indices(), vec![1, 4]);
    }

    #[test]
    fn test_toggle_theme_arms_pulse() {
        let mut app = app();
        let base = Instant::now();

        app.handle_action(Action::ToggleTheme, base);
        app.on_tick(base);
        assert!(app.pulse.is_active());
        assert_eq!(app.theme_store.mode(), ThemeMode::Dark);

        // Pulse clears within the cool-down window.
        app.on_tick(at(base, 600));
        assert!(!app.pulse.is_active());
    }

    #[test]
    fn test_hero_reveals_start_at_top() {
        let mut app = app();
        let base = Instant::now();
        app.on_tick(base);
        assert!(app.hero_title.has_begun());
        assert!(app.hero_lede.has_revealed());
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut app = app();
        let base = Instant::now();
        app.on_tick(base);
        assert_eq!(app.tracker.active(), Section::Home);

        let about_top = app.layout.about.top;
        app.scroll.set_scroll(about_top + 1.0);
        app.on_tick(at(base, 50));
        assert_eq!(app.tracker.active(), Section::About);
    }

    #[test]
    fn test_go_to_section_targets_top() {
        let mut app = app();
        let base = Instant::now();
        app.handle_action(Action::GoToSection(Section::Contact), base);
        let expected = app
            .layout
            .contact
            .top
            .min(app.layout.max_scroll());
        assert!((app.scroll.target() - expected).abs() < 1.0);
    }

    #[test]
    fn test_pending_g_sequence() {
        let mut app = app();
        let base = Instant::now();
        app.handle_action(Action::PendingG, base);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::JumpToTop, base);
        assert_eq!(app.pending_key, None);
        assert!((app.scroll.target() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduced_motion_collapses_timing() {
        let mut config = AppConfig::default();
        config.motion.reduced_motion = true;
        let mut app = App::new(Arc::new(config), content::builtin_work());
        app.on_resize(100, 30);

        let base = Instant::now();
        app.on_tick(base);
        // Reveals jump straight to their settled style.
        let style = app.hero_lede.style(at(base, 1));
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_palette_crossfades_during_pulse() {
        let mut app = app();
        let base = Instant::now();
        app.on_tick(base);

        let before = app.palette(base).bg0;
        app.handle_action(Action::ToggleTheme, base);
        app.on_tick(base);

        // Mid-pulse the background is neither pure light nor pure dark.
        let mid = app.palette(at(base, 250)).bg0;
        assert_ne!(mid, before);
        let settled = app.palette(at(base, 600)).bg0;
        assert_ne!(settled, before);
        assert_ne!(mid, settled);
    }
}
