//! Command-line interface for project-summary.
//!
//! Resolves the project directory from an argument, a history selection or an
//! interactive prompt, records it in the history and writes the summary.

use clap::Parser;
use project_summary::generate_project_summary;
use project_summary::history::HistoryStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// project-summary — snapshot a project directory into one text document
#[derive(Parser)]
#[command(name = "project-summary", version, about, long_about = None)]
struct Cli {
    /// Project directory (chosen interactively when omitted)
    path: Option<PathBuf>,

    /// Output file (default: <project>_project_summary.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut history = HistoryStore::default();
    let project_path = match cli.path {
        Some(path) => path,
        None => match choose_path(&history) {
            Some(path) => path,
            None => exit(1),
        },
    };

    history.add_entry(&project_path);
    info!("Generating summary: {}", project_path.display());
    if !generate_project_summary(project_path, cli.output) {
        exit(1);
    }
}

/// Asks for a project directory; `None` means the user gave up or chose badly.
fn choose_path(history: &HistoryStore) -> Option<PathBuf> {
    if history.is_empty() {
        let input = prompt("Enter the project directory path: ")?;
        if input.is_empty() {
            eprintln!("No path entered. Aborting.");
            return None;
        }
        return Some(PathBuf::from(input));
    }

    println!("Select a project directory from history:");
    for (i, path) in history.entries().iter().enumerate() {
        println!("[{}] {}", i + 1, path.display());
    }
    let input = prompt("\nEnter a number or a path (blank to quit): ")?;
    if input.is_empty() {
        eprintln!("Aborted.");
        return None;
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        match history.select(&input) {
            Ok(path) => Some(path.to_path_buf()),
            Err(e) => {
                eprintln!("Error: {}", e);
                None
            }
        }
    } else {
        Some(PathBuf::from(input))
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    if io::stdout().flush().is_err() {
        eprintln!("Failed to write to stdout");
        return None;
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}
