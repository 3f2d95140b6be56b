use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use pageflow_core::{AppConfig, Deck};
use pageflow_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{DotsWidget, HelpWidget, HintWidget, SectionsWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, deck_path: Option<PathBuf>) -> Result<()> {
    let deck = match deck_path {
        Some(path) => Deck::load(&path)?,
        None => Deck::demo(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Pageflow")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, deck);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        // Drive timers every iteration so transitions complete and wheel
        // bursts flush even while input keeps the poll busy.
        app.on_tick(Instant::now());

        let now = Instant::now();
        terminal.draw(|frame| {
            let size = frame.area();
            app.viewport = size;

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            SectionsWidget::render(frame, main_layout[0], app, now);
            if app.effects_enabled {
                app.particles.render(frame, main_layout[0]);
            }
            DotsWidget::render(frame, main_layout[0], app, now);
            HintWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[1], app, now);

            if app.mode == Mode::Help {
                HelpWidget::render(frame);
            }
        })?;

        if let Some(event) = events.next()? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    app.on_mouse(mouse, now);
                }
                AppEvent::Resize(w, h) => {
                    app.on_resize(w, h);
                }
                AppEvent::Tick => {
                    app.on_tick(now);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
