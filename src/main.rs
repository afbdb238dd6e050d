//! FitTrack - terminal fitness tracker
//!
//! Sets up logging and storage from the configuration file, then runs the
//! ratatui event loop until the user quits.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing_subscriber::EnvFilter;

use fittrack::application::{App, AppMode, BackgroundTasks, Route};
use fittrack::domain::AuthMode;
use fittrack::infrastructure::{
    Config, HttpQuoteSource, JsonFileStore, OfflineQuoteSource, QuoteSource, RemoteGateway,
};
use fittrack::presentation::{InputHandler, render_ui};

#[derive(Debug, Parser)]
#[command(name = "fittrack", version, about = "Terminal fitness tracker")]
struct Cli {
    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `data_dir` from the config file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Accept any credentials at sign-in
    #[arg(long)]
    demo: bool,

    /// Never contact the quote service
    #[arg(long)]
    offline: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.demo {
        config.auth_mode = AuthMode::Demo;
    }

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("cannot create data directory {}", config.data_dir.display()))?;
    init_logging(&config)?;

    tracing::info!(data_dir = %config.data_dir.display(), auth_mode = ?config.auth_mode, "starting fittrack");

    let store = JsonFileStore::open(config.storage_path());
    let gateway = RemoteGateway::new(quote_source(&config, cli.offline), config.search_latency());
    let mut app = App::init(Box::new(store), config.auth_mode, Utc::now())
        .with_tasks(BackgroundTasks::new(Arc::new(gateway)))
        .with_export_dir(config.data_dir.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal error");
        println!("{err:?}");
    }

    Ok(())
}

/// The terminal belongs to the UI, so log lines go to a file.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let path = config.log_path();
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fittrack=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn quote_source(config: &Config, offline: bool) -> Box<dyn QuoteSource> {
    if offline {
        return Box::new(OfflineQuoteSource);
    }
    match HttpQuoteSource::new(config.quote_endpoint.clone(), config.request_timeout()) {
        Ok(source) => Box::new(source),
        Err(err) => {
            tracing::warn!(error = %err, "quote client unavailable, using fallback quotes");
            Box::new(OfflineQuoteSource)
        }
    }
}

/// Draws, applies finished background requests and dispatches key presses.
///
/// `q` quits from any signed-in screen in normal mode; Ctrl+C quits anywhere.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if app.poll_background() {
            dirty = true;
        }
        if dirty {
            terminal.draw(|f| render_ui(f, app))?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                    KeyCode::Char('q') if app.mode == AppMode::Normal && app.route != Route::Auth => {
                        return Ok(());
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
                dirty = true;
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }
}
