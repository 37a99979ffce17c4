//! CLI module for Paper Digest
//!
//! Subcommands:
//! - `summary`: extract, summarize in Traditional Chinese and write a report
//! - `extract`: extract and split into sections without calling the model
//! - `version`: print the crate version

pub mod extract;
pub mod summary;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::files::{MarkdownWriter, default_output_path};
use crate::infrastructure::logging;

/// Paper Digest - Traditional Chinese summaries of academic PDFs
#[derive(Parser)]
#[command(name = "paper-digest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a paper into a Markdown report
    Summary(SummaryArgs),

    /// Split a paper into sections without summarizing
    Extract(DocumentArgs),

    /// Print version information
    Version,
}

/// Arguments shared by the document commands
#[derive(Args, Clone, Debug)]
pub struct DocumentArgs {
    /// Path to the PDF file
    pub pdf: PathBuf,

    /// Output Markdown path (defaults to the PDF path with `.md`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the Markdown to stdout instead of writing a file
    #[arg(short, long)]
    pub preview: bool,
}

/// Arguments for the summary command
#[derive(Args, Clone, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Write the per-section summaries instead of the insight report
    #[arg(short, long)]
    pub sections: bool,
}

impl DocumentArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.pdf))
    }
}

pub fn print_version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Load `.env` and layered config, then install logging
fn init() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    config
}

/// Print to stdout on preview, otherwise write the report file
fn emit(args: &DocumentArgs, markdown: &str) -> anyhow::Result<Option<PathBuf>> {
    if args.preview {
        println!("{}", markdown);
        return Ok(None);
    }

    let path = args.output_path();
    MarkdownWriter::new().write(&path, markdown)?;
    Ok(Some(path))
}

fn report_written(path: Option<&Path>) {
    if let Some(path) = path {
        println!("Markdown saved to {}", path.display());
    }
}
