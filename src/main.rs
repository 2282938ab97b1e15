//! patchup: CLI for one-shot source cleanups in the practice-chat frontend
//!
//! Runs a fixed batch of textual fixes against known files in the app tree:
//! tightens a declaration keyword, types the speech-recognition handlers,
//! drops an unused state hook and import, and rewrites the stylesheet.

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

mod commands;
mod config;
mod patch;

#[derive(Parser)]
#[command(name = "patchup")]
#[command(about = "Apply the scripted source cleanups to the app tree", long_about = None)]
#[command(version)]
struct Cli {
    /// App root containing the target files (defaults to current directory)
    app_root: Option<String>,

    /// Show what would be changed without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dry_run {
        println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
    }

    let app_root = match cli.app_root {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    commands::fix::execute(&app_root, cli.dry_run)
}
