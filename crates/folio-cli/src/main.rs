//! Folio - a terminal portfolio with viewport-synchronized navigation
//!
//! A single scrolling page of sections with a navbar that follows the
//! reader, plus a paginated resume viewer on its own route.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio_core::{paths, FolioConfig, PagedDocument};

mod tui;

use tui::components::NAVBAR_HEIGHT;
use tui::content::{nav_links, tracked_sections};
use tui::{App, AppOptions, DocumentSource};

/// Folio - terminal portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a scroll-aware navbar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resume document: UTF-8 text, pages separated by form feeds
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Route to open on start
    #[arg(short, long, default_value = "/")]
    route: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List navbar links and the sections they track
    Sections,
    /// Load a document and report its pages
    CheckDocument { path: PathBuf },
}

/// Defaults in terminal cells rather than pixels
fn terminal_defaults() -> FolioConfig {
    let mut config = FolioConfig::default();
    config.navigation.navbar_offset = NAVBAR_HEIGHT as f64;
    config.pagination.padding = 4.0;
    config.pagination.max_page_width = 100.0;
    config.pagination.initial_width = 100.0;
    config.pagination.page_gap = 1.0;
    config.progress.scrolled_threshold = 2.0;
    config
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file so output never lands on the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    match std::fs::File::create(log_dir.join("folio.log")) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

fn print_sections() {
    let links = nav_links();
    println!("Navbar links:");
    for (i, link) in links.iter().enumerate() {
        match &link.target {
            folio_core::NavigationTarget::Section { id } => {
                println!("  {}  {:<14} section #{}", i + 1, link.label, id)
            }
            folio_core::NavigationTarget::Route { path, .. } => {
                println!("  {}  {:<14} route {}", i + 1, link.label, path)
            }
        }
    }
    println!();
    println!("Tracked sections: {}", tracked_sections(&links).join(", "));
}

fn check_document(path: &Path) -> Result<()> {
    let doc = PagedDocument::load(path)?;
    println!("{}: {} page(s)", path.display(), doc.page_count());
    for (i, page) in doc.pages().iter().enumerate() {
        let first_line = page.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        println!("  {:>3}  {}", i + 1, first_line.trim());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sections) => print_sections(),
        Some(Commands::CheckDocument { path }) => check_document(&path)?,
        None => {
            let config = FolioConfig::load_or(terminal_defaults(), cli.config.as_deref())
                .context("Failed to load config")?;
            let document = cli
                .document
                .map_or(DocumentSource::Builtin, DocumentSource::File);

            let mut app = App::new(
                config,
                AppOptions {
                    document,
                    initial_route: cli.route,
                },
            );
            app.run().await?;
        }
    }

    Ok(())
}
