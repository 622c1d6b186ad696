use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Arc, sync::Mutex, time::Duration};
use tracing_subscriber::EnvFilter;

use echotui::api::EchoClient;
use echotui::config::{get_config_path, Config, Overrides};
use echotui::{handlers, ui, utils, Controller, ControllerOptions};

/// EchoEase terminal control panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/echotui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long, env = "ECHOEASE_API_BASE")]
    base_url: Option<String>,

    /// Interval between status polls in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,
}

/// Log to a file; stdout belongs to the TUI
fn init_debug_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("echotui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_debug_logging()?;
        tracing::info!("debug mode enabled");
    }

    let config_path = get_config_path(args.config.as_deref())?;
    tracing::debug!(?config_path, "loading config");

    let mut config = Config::load(config_path.as_deref())?;
    config.apply(Overrides {
        base_url: args.base_url,
        poll_interval_ms: args.poll_interval_ms,
        vim_mode: args.vim,
    });
    tracing::info!(base_url = %config.base_url, "using backend");

    let client = EchoClient::new(config.base_url.clone(), config.request_timeout())?;
    let mut controller = Controller::new(
        Arc::new(client),
        ControllerOptions {
            poll_interval: config.poll_interval(),
            vim_mode: config.vim_mode,
        },
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut controller);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    controller.dispose();
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, &controller.model);
        })?;

        if controller.model.ui.should_quit {
            break;
        }

        // Poll ticks and API responses (non-blocking)
        controller.pump();

        // Short timeout so responses show up promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(controller, key);
            }
        }
    }

    Ok(())
}
