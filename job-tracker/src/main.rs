mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod persistence;
mod runtime;
mod storage;
mod test_data;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TrackerConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{Persistence, STORAGE_KEY};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = TrackerConfig::load()?;

    let store: Arc<dyn KeyValueStore> = match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = TrackerConfig::ensure_default_file()?;
            println!("{}", path.display());
            return Ok(());
        }
        Commands::Run => Arc::new(FileStore::new(cfg.data_dir()?)),
        Commands::Dev => {
            let seed = serde_json::to_string(&test_data::sample_applications())?;
            Arc::new(MemoryStore::new().with_value(STORAGE_KEY, seed))
        }
    };

    let log_path = cfg.log_path()?;
    logging::init_tracing(&cfg.log_level, &log_path)?;
    tracing::info!(log = %log_path.display(), "job tracker starting");

    let persistence = Persistence::new(store);
    let mut app = App::new();
    bootstrap::initialize_app_state(&mut app, &persistence).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &persistence).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "job tracker exited with error");
    } else {
        tracing::info!("job tracker stopped");
    }

    res.context("Terminal UI failed")
}
