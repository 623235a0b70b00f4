use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pawsome::{app, events, logging, ui, App, Settings, Theme, ThemeChoice};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "pawsome")]
#[command(about = "Paw-some Dog World: breeds, fun facts and care tips in your terminal")]
struct Args {
    /// Path to a TOML config file (defaults to ./pawsome.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Don't show image links on breed cards
    #[arg(long)]
    no_images: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export all content to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if args.no_images {
        settings.images.enabled = false;
    }
    if args.log_file.is_some() {
        settings.log_file = args.log_file;
    }

    if let Some(ref log_file) = settings.log_file {
        logging::init_file_logging(log_file)?;
    }

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        let images = settings.images.provider();
        app::export_content(images.as_ref(), &export_path)?;
        println!("Exported content to: {}", export_path.display());
        return Ok(());
    }

    run_tui(&settings)
}

/// Run the TUI with the given settings
fn run_tui(settings: &Settings) -> Result<()> {
    // Detect the theme before raw mode; detection queries the terminal itself
    let theme = Theme::from_choice(settings.theme);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(settings.images.provider(), theme);
    tracing::info!(images = app.images_description(), "starting");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.screen_fits = ui::screen_fits(size.width, size.height);

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = events::poll_event(POLL_INTERVAL)? {
            events::handle_event(app, event);
        }
    }

    Ok(())
}
