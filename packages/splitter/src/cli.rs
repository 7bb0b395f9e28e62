//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{default_sources, load_sources, Layout, Source};
use crate::error::Result;
use crate::fetch::{update_sources, UpdateReport};
use crate::http::create_client;
use crate::pipeline::{split_documents, SplitReport};
use crate::splitting::{LengthSplitStrategy, SplitEngine};

/// Tiku Splitter - Mirror problem-set Markdown and split it into site pages.
#[derive(Parser)]
#[command(name = "tiku-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Site root holding original/, etag/, docs/ and the config template
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// YAML file listing `{name, url}` sources (default: built-in list)
    #[arg(long, global = true)]
    pub sources: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch changed sources; prints `true` if anything changed.
    Update,

    /// Split stored documents into pages and regenerate the sidebar.
    Split {
        /// Document names (default: every configured source)
        names: Vec<String>,
    },

    /// Update, then split every source.
    Run,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let layout = Layout::new(&cli.root);

    match cli.command {
        Commands::Update => {
            let sources = resolve_sources(cli.sources.as_deref())?;
            let report = update_command(&sources, &layout)?;
            println!("{}", report.any_changed());
            Ok(())
        }
        Commands::Split { names } => {
            let names = if names.is_empty() {
                source_names(&resolve_sources(cli.sources.as_deref())?)
            } else {
                names
            };
            split_command(&names, &layout)
        }
        Commands::Run => {
            let sources = resolve_sources(cli.sources.as_deref())?;
            let report = update_command(&sources, &layout)?;
            print_update_summary(&report);
            split_command(&source_names(&sources), &layout)
        }
    }
}

fn resolve_sources(path: Option<&Path>) -> Result<Vec<Source>> {
    match path {
        Some(path) => load_sources(path),
        None => Ok(default_sources()),
    }
}

fn source_names(sources: &[Source]) -> Vec<String> {
    sources.iter().map(|s| s.name.clone()).collect()
}

/// Execute the update command.
fn update_command(sources: &[Source], layout: &Layout) -> Result<UpdateReport> {
    let client = create_client()?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Fetching {} source(s)...", sources.len()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = update_sources(&client, sources, layout);
    pb.finish_and_clear();
    result
}

fn print_update_summary(report: &UpdateReport) {
    let changed = report.changed();
    if changed.is_empty() {
        println!("{}", style("All sources up to date").dim());
    } else {
        println!(
            "{} {}",
            style("Updated:").green().bold(),
            style(changed.join(", ")).cyan()
        );
    }
}

/// Execute the split command.
fn split_command(names: &[String], layout: &Layout) -> Result<()> {
    let engine = SplitEngine::new(LengthSplitStrategy::default());
    let report = split_documents(&engine, layout, names)?;
    print_split_summary(&report);
    Ok(())
}

fn print_split_summary(report: &SplitReport) {
    for document in &report.documents {
        println!(
            "{} {}: {} pages from {} headings",
            style("Split").bold(),
            style(&document.name).cyan(),
            document.files_written,
            document.headings
        );
        if !document.misses.is_empty() {
            println!(
                "  Unmatched headings: {}",
                style(document.misses.len()).yellow().bold()
            );
        }
    }

    for skipped in &report.skipped {
        println!(
            "{} {}: {}",
            style("Skipped").yellow().bold(),
            style(&skipped.name).cyan(),
            skipped.reason
        );
    }

    if let Some(path) = &report.config_path {
        println!();
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }
}
