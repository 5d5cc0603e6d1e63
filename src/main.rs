// Tab Bar View
// Full-screen host for a bottom tab bar configured from YAML

use anyhow::Result;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use tab_bar_view::{
    config::default_config_path,
    load_config,
    logging::init_logging,
    ui::{run_app, TerminalGuard},
    validate_config, App, DEFAULT_LOG_FILE,
};

#[derive(Debug, Parser)]
#[command(name = "tab-bar-view", version, about)]
struct Cli {
    /// Configuration file (defaults to the bundled src/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (overrides application.log_file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from YAML file; it names the log file
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let app_config = load_config(&config_path)?;

    let log_file = cli
        .log_file
        .or_else(|| app_config.application.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    init_logging(&log_file)?;

    // Validate once the subscriber is up so soft problems land in the log
    validate_config(&app_config)?;
    tracing::debug!(
        path = %config_path.display(),
        tab_bars = app_config.tab_bars.len(),
        "configuration loaded"
    );

    let mut app = App::from_config(&app_config)?;
    tracing::info!(
        title = %app.title,
        tabs = app.tab_bar.tabs().len(),
        "starting tab bar view"
    );

    // Setup terminal; the guard restores it on every exit path
    let guard = TerminalGuard::enter(app.mouse_enabled)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}
