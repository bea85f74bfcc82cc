use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::Ordering,
    time::Duration,
};

use shoptui::{config::Config, handlers, ui, utils, App, DEBUG_MODE};

/// Shopping List TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shopping list to open (created on first use)
    #[arg(short, long, default_value = "Groceries")]
    list: String,

    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific config dir)
    #[arg(short, long)]
    config: Option<String>,
}

fn get_config_path(override_path: Option<String>) -> PathBuf {
    if let Some(path) = override_path {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("shoptui").join("config.yaml")
    } else {
        PathBuf::from("shoptui.yaml")
    }
}

/// Load the YAML config; a missing file means defaults
fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_yaml::from_str(&config_str)
        .with_context(|| format!("parsing config {}", path.display()))?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        utils::log_debug("Debug mode enabled");
    }

    // Load configuration
    let config_path = get_config_path(args.config);
    utils::log_debug(&format!("Loading config from: {}", config_path.display()));
    let config = load_config(&config_path)?;

    // Initialize app (opens the list and kicks off the first reload)
    let mut app = App::new(config, &args.list)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process store responses (non-blocking)
        while let Ok(response) = app.store_rx.try_recv() {
            handlers::store::handle_store_response(app, response);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }

    Ok(())
}
