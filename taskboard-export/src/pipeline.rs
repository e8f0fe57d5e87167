//! The canonical export pipeline: one input file in, one HTML file out.
//!
//! ```text
//! read → parse_document → organize → render page → atomic_write
//! ```
//!
//! Parsing completes before the output directory or file is touched, so a
//! fatal input error never leaves partial output behind.

use std::path::{Path, PathBuf};

use taskboard_core::{organize, parse_document, Board};
use taskboard_renderer::{Renderer, Theme};

use crate::error::{io_err, ExportError};
use crate::writer::{atomic_write, WriteResult};

/// Fixed name of the generated file inside the output directory.
pub const OUTPUT_FILENAME: &str = "index.html";

/// Outcome of a pipeline run, handed back for console reporting.
#[derive(Debug)]
pub struct ExportSummary {
    /// The organized board (the console report renders from this).
    pub board: Board,
    /// Full path of the generated file.
    pub path: PathBuf,
    /// Whether the file was written or already up to date.
    pub write: WriteResult,
}

/// Run the whole pipeline for one board file.
///
/// Reads `input`, parses and organizes the board, renders the page with the
/// default theme, and atomically writes `<output_dir>/index.html`, creating
/// `output_dir` if absent.
pub fn run(input: &Path, output_dir: &Path) -> Result<ExportSummary, ExportError> {
    let text = std::fs::read_to_string(input).map_err(|e| io_err(input, e))?;
    log::debug!("read {} bytes from {}", text.len(), input.display());

    let document = parse_document(&text)?;
    let board = organize(&document);

    let renderer = Renderer::new()?;
    let page = renderer.render_page(&board, Theme::default())?;

    let path = output_dir.join(OUTPUT_FILENAME);
    let write = atomic_write(&path, &page)?;

    Ok(ExportSummary { board, path, write })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
