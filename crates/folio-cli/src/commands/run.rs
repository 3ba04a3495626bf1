use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use folio_core::{content, AppConfig};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    layout::{NAVBAR_ROWS, STATUS_ROWS},
    widgets::{CursorWidget, HelpWidget, NavBarWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Work list: user override in the config dir, else the built-ins.
    let work = content::load_work_or_builtin(Some(&AppConfig::work_path()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_capture {
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle("Alex Kim — Portfolio")
        )?;
    } else {
        execute!(stdout, EnterAlternateScreen, SetTitle("Alex Kim — Portfolio"))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), work);
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop errored
    disable_raw_mode()?;
    if config.ui.mouse_capture {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();

        match events.next(app.is_animating(now))? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.handle_action(action, now);
            }
            Some(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, now),
            Some(AppEvent::Resize(w, h)) => app.on_resize(w, h),
            Some(AppEvent::Tick) | None => {}
        }

        app.on_tick(now);

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NAVBAR_ROWS),
                    Constraint::Min(1),
                    Constraint::Length(STATUS_ROWS),
                ])
                .split(frame.area());

            PageWidget::render(frame, chunks[1], app, now);
            NavBarWidget::render(frame, chunks[0], app, now);
            StatusBarWidget::render(frame, chunks[2], app, now);
            CursorWidget::render(frame, frame.area(), app, now);
            if app.mode == Mode::Help {
                HelpWidget::render(frame, app, now);
            }
        })?;
    }
}
