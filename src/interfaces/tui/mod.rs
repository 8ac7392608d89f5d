//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal dashboard for registered Parse Server apps

use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

mod app;
mod constants;
mod event_handler;
mod ui;

use crate::config::StaticConfig;
use crate::registry::AppRegistry;
use crate::services::CloneProgressHub;
use crate::transport::{ParseHttpApi, ServerApi};
use app::App;
use constants::TICK_RATE_MS;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(config: &StaticConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(AppRegistry::open(&config.registry.path)?);
    let api: Arc<dyn ServerApi> = Arc::new(ParseHttpApi::from_config(config));
    let progress = Arc::new(CloneProgressHub::new());

    let poller = config.progress.source_url.as_ref().map(|source| {
        info!("Polling clone progress from {}", source);
        progress.clone().spawn_poller(
            api.clone(),
            registry.clone(),
            Duration::from_secs(config.progress.poll_interval_secs.max(1)),
        )
    });

    let refresh_interval = config
        .refresh
        .enabled
        .then(|| Duration::from_secs(config.refresh.interval_secs.max(1)));

    let mut app = App::new(
        registry,
        api,
        progress,
        config.form.default_server_url.clone(),
    )
    .with_refresh_interval(refresh_interval);

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(poller) = poller {
        poller.abort();
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_RATE_MS);

    loop {
        app.drain_events();
        if app.refresh_due() {
            app.request_refresh();
        }

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let should_exit = event_handler::handle_key_event(app, key.code)?;

            if should_exit {
                return Ok(());
            }
        }
    }
}
