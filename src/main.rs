use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use photo_importer_app::App;
use photo_importer_config::Settings;
use photo_importer_core::Importer;
use photo_importer_models::{ProgressEvent, RunSummary};
use photo_importer_utils::{create_log_path, format_bytes};

/// Copy photos from a memory card into a date-organized library
#[derive(Parser, Debug)]
#[command(name = "photo-importer", version, about)]
struct Args {
    /// Folder to import from, usually the camera card
    source: Option<PathBuf>,

    /// Library root that receives `<YYYY>/<YYYY-MM-DD>/` folders
    destination: Option<PathBuf>,

    /// Run the import without the terminal UI
    #[arg(long)]
    headless: bool,

    /// With --headless, print every progress event as a JSON line
    #[arg(long, requires = "headless")]
    json: bool,

    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path).await?,
        None => Settings::load().await?,
    };
    settings.apply_overrides(args.source.clone(), args.destination.clone());

    setup_logging(&settings)?;

    let result = if args.headless {
        run_headless(&settings, args.json).await
    } else {
        run(&settings, args.config.as_deref()).await
    };

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging(settings: &Settings) -> Result<()> {
    let log_path = create_log_path("photo-importer", "photo-importer.log")?;

    // Create or truncate log file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .init();

    info!("Starting photo importer...");
    info!("Log file: {}", log_path.display());

    Ok(())
}

async fn run(settings: &Settings, config_path: Option<&Path>) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(eyre!("This application must be run in a terminal, or with --headless"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app, settings.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Runtime error: {:?}", err);
        return Err(err);
    }

    remember_folders(settings, &app, config_path);
    Ok(())
}

/// Stores the folders typed in this session so the next launch starts with them.
fn remember_folders(settings: &Settings, app: &App, config_path: Option<&Path>) {
    let typed = |text: &str| Some(text.trim()).filter(|t| !t.is_empty()).map(PathBuf::from);

    let mut updated = settings.clone();
    updated.apply_overrides(typed(&app.source_input), typed(&app.destination_input));
    if updated == *settings {
        return;
    }

    let saved = match config_path {
        Some(path) => updated.save_to(path),
        None => updated.save(),
    };
    if let Err(e) = saved {
        warn!("Could not save folders to settings: {e}");
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| photo_importer_ui::draw(f, app))?;

        // Handle events with timeout
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        info!("User forced quit");
                        return Ok(());
                    }

                    app.on_key(key)?;
                    if app.should_quit {
                        info!("User requested quit");
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick()?;
            last_tick = Instant::now();
        }

        // Let the worker's channel make progress between frames.
        tokio::task::yield_now().await;
    }
}

async fn run_headless(settings: &Settings, json: bool) -> Result<()> {
    let summary = import_headless(settings, json, &mut io::stdout(), &mut io::stderr()).await?;
    info!(
        "Copied {} photos ({}), skipped {} already present",
        summary.copied,
        format_bytes(summary.bytes_copied),
        summary.skipped
    );
    Ok(())
}

/// Runs one import without the UI. Progress goes to `out`; in text mode the
/// failure message goes to `err`. Fails when the run does.
async fn import_headless(
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<RunSummary> {
    let source = settings.source_folder.clone().unwrap_or_default();
    let destination = settings.destination_folder.clone().unwrap_or_default();

    let mut handle = Importer::new().start(&source, &destination)?;
    info!(job_id = %handle.job_id(), "Headless import started");

    let mut failure = None;
    while let Some(event) = handle.next_event().await {
        if let Some(line) = event_line(&event, json)? {
            writeln!(out, "{line}")?;
        }
        if let ProgressEvent::Failed(message) = event {
            if !json {
                writeln!(err, "{message}")?;
            }
            failure = Some(message);
        }
    }

    if let Some(message) = failure {
        return Err(eyre!(message));
    }

    let summary = handle.wait().await?;
    if !json {
        writeln!(
            out,
            "{} copied ({}), {} skipped",
            summary.copied,
            format_bytes(summary.bytes_copied),
            summary.skipped
        )?;
    }
    Ok(summary)
}

/// Line printed for `event` on standard output, if any.
fn event_line(event: &ProgressEvent, json: bool) -> serde_json::Result<Option<String>> {
    if json {
        return serde_json::to_string(event).map(Some);
    }
    Ok(match event {
        ProgressEvent::Status(text) | ProgressEvent::Completed(text) => Some(text.clone()),
        _ => None,
    })
}
