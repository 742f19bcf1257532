//! City Weather - look up current conditions by city
//!
//! A terminal UI application that fetches current weather from WeatherAPI.com
//! for a typed city and keeps a search history for the session.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use cityweather::app::{Action, App, Effect};
use cityweather::cli::{Cli, StartupConfig};
use cityweather::data::WeatherClient;
use cityweather::fetch::FetchWorker;
use cityweather::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Runs the event loop until the user quits
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &mut FetchWorker,
) -> io::Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(Effect::Fetch(request)) = app.handle_key(key) {
                    worker.spawn(request);
                }
            }
        }

        // Apply every fetch that finished since the last tick
        while let Some(outcome) = worker.try_recv() {
            app.dispatch(Action::FetchCompleted(outcome));
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Parse CLI arguments before touching the terminal
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Warning: logging disabled ({})", e);
        }
    }
    info!(base_url = %config.base_url, accent = config.accent_enabled, "starting");

    let client = WeatherClient::new(config.api_key.clone()).with_base_url(config.base_url.clone());
    let mut worker = FetchWorker::new(client);
    let mut app = App::with_startup_config(&config);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut worker).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.in_flight > 0 {
        warn!(pending = app.in_flight, "quitting with fetches still pending");
    }
    info!(searches = app.history.len(), "exiting");

    result?;
    Ok(ExitCode::SUCCESS)
}
