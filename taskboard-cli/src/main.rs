//! taskboard — render a line-tagged board description into a static HTML
//! kanban board plus a console summary.
//!
//! # Usage
//!
//! ```text
//! taskboard <INPUT_FILE> <OUTPUT_DIR>
//! ```
//!
//! One shot: read the input file, write `<OUTPUT_DIR>/index.html` (directory
//! created if absent), print the board to the console. Fatal input errors
//! (malformed attribute, missing title, unknown phase) abort with a
//! diagnostic and a non-zero exit before any output is written.

mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use taskboard_export::{pipeline, WriteResult};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "Render a line-tagged board description into a static HTML kanban board",
    long_about = None,
)]
struct Cli {
    /// Board description file (line-tagged text: `name: value | key=val`).
    input: PathBuf,

    /// Destination directory for the generated index.html (created if absent).
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let started = Instant::now();

    println!("input file: {}", cli.input.display());
    println!("output dir: {}", cli.output_dir.display());
    println!();

    let summary = pipeline::run(&cli.input, &cli.output_dir)
        .with_context(|| format!("failed to export '{}'", cli.input.display()))?;

    report::print_board(&summary.board);

    match &summary.write {
        WriteResult::Written { path } => println!("✎  {}", path.display()),
        WriteResult::Unchanged { path } => println!("·  {} (unchanged)", path.display()),
    }
    println!("total time: {:.2?}", started.elapsed());
    Ok(())
}
