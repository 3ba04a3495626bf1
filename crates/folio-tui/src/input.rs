use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio_core::Section;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    GoToSection(Section),
    NextSection,
    PrevSection,
    ToggleTheme,
    CycleFilter,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key dismisses the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,

        // Section navigation
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            match Section::from_index(index) {
                Some(section) => Action::GoToSection(section),
                None => Action::None,
            }
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevSection,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PrevSection,

        // Theme and filter
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::CycleFilter,

        // Help
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::Help,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::Help,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use folio_core::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default().into(), folio_core::content::builtin_work())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_bindings() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::ToggleTheme);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), &app),
            Action::GoToSection(Section::Work)
        );
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_any_key_exits_help() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::ExitMode);
    }
}
