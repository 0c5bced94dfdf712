//! Showcase TUI - Login, dashboard and detail screens in the terminal
//!
//! Logs go to a file because the terminal belongs to the interface.

use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use showcase_tui::app::{ConfigError, EventHandler, ThemeChoice, TuiConfig};
use showcase_tui::App;

#[derive(Parser)]
#[command(name = "showcase-tui")]
#[command(about = "Sign in and browse the showcase tech stack", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ~/.config/showcase/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to open, e.g. /dashboard or /detail/3
    #[arg(short, long)]
    open: Option<String>,

    /// Use the high-contrast theme
    #[arg(long)]
    high_contrast: bool,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        return init_config(cli.config);
    }

    let (mut config, config_error) = match &cli.config {
        Some(path) => {
            let config = TuiConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, None)
        }
        None => TuiConfig::load(),
    };
    if cli.high_contrast {
        config.theme = ThemeChoice::HighContrast;
    }

    init_logging(&config)?;
    if let Some(e) = &config_error {
        tracing::warn!("Ignoring config file {:?}: {}", TuiConfig::config_file_path(), e);
    }

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_app(&config, config_error.as_ref(), cli.open.as_deref());

    if let Err(e) = &result {
        tracing::error!("Application error: {:#}", e);
    }

    result
}

/// Write the default configuration to the requested or standard path
fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .or_else(TuiConfig::config_file_path)
        .ok_or(ConfigError::NoConfigDir)?;

    TuiConfig::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Send tracing output to the log file
///
/// RUST_LOG takes precedence over the configured filter.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?
        .add_directive("showcase_tui=info".parse()?);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .init();

    tracing::info!(log = %path.display(), "Starting showcase-tui");
    Ok(())
}

/// Main application runner
fn run_app(
    config: &TuiConfig,
    config_error: Option<&ConfigError>,
    open: Option<&str>,
) -> Result<()> {
    let mut app = App::new(config);
    if let Some(e) = config_error {
        app.report_config_error(e);
    }
    if let Some(path) = open {
        app.open_link(path)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(config.tick_rate());
    let result = app.run(&mut terminal, &mut events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
