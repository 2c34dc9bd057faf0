//! Command-line interface for the fetch tool's desktop helpers.
//!
//! Exposes the reveal-confirmation dialog and the visible-directory locator
//! as one-shot subcommands for the parent fetch tool to invoke.

use automation::{confirm_download, visible_directory, AutomationError, OsaSurface};
use clap::{Parser, Subcommand};
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "fetch-helper")]
#[command(version, about = "Desktop helpers for the fetch tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Offer to reveal a finished download in the file manager
    ConfirmDownload {
        /// Path of the downloaded file, shown verbatim in the dialog
        path: String,
    },

    /// Print the directory shown by the file manager's front window
    VisibleDir,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ConfirmDownload { path } => handle_confirm_download(&path),
        Commands::VisibleDir => handle_visible_dir(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_confirm_download(path: &str) -> Result<(), AutomationError> {
    let mut surface = OsaSurface::new();
    let choice = confirm_download(&mut surface, path)?;
    debug!(?choice, "dialog resolved");
    Ok(())
}

fn handle_visible_dir() -> Result<(), AutomationError> {
    let mut surface = OsaSurface::new();
    let dir = visible_directory(&mut surface)?;
    println!("{dir}");
    Ok(())
}
