use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;

use reqtree::app::App;
use reqtree::cli::Cli;
use reqtree::config::Config;
use reqtree::event::Event;
use reqtree::storage::workspace as ws_storage;
use reqtree::store::WorkspaceStore;
use reqtree::{terminal, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;
    init_logging(&config.log_path())?;

    let workspace_path = cli
        .workspace
        .clone()
        .unwrap_or_else(|| ws_storage::workspace_path(&config.workspace));
    let workspace = ws_storage::load_or_empty(&workspace_path)
        .with_context(|| format!("loading workspace from {}", workspace_path.display()))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    let event_tx = tx.clone();
    std::thread::spawn(move || loop {
        let polled = crossterm::event::poll(Duration::from_millis(50)).unwrap_or(false);
        let event = if polled {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => Event::Key(key),
                Ok(crossterm::event::Event::Mouse(mouse)) => Event::Mouse(mouse),
                Ok(crossterm::event::Event::Resize(w, h)) => Event::Resize(w, h),
                _ => continue,
            }
        } else {
            Event::Tick
        };
        if event_tx.send(event).is_err() {
            break;
        }
    });

    let mut terminal = terminal::init()?;
    let mut app = App::new(WorkspaceStore::new(workspace), &config);

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    result?;

    ws_storage::save_to_path(&workspace_path, &app.state.store.workspace)
        .with_context(|| format!("saving workspace to {}", workspace_path.display()))?;
    tracing::info!("exiting");
    Ok(())
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        if app.state.dirty {
            terminal.draw(|frame| ui::layout::render(frame, &app.state))?;
            app.state.dirty = false;
        }

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}

/// The TUI owns stdout, so logs go to a file. `RUST_LOG` overrides the level.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();
    Ok(())
}
