//! # taskboard-export
//!
//! Hash-gated atomic writer and the canonical end-to-end pipeline.
//!
//! Call [`pipeline::run`] to turn one board input file into
//! `<output_dir>/index.html` and get back an [`ExportSummary`] for console
//! reporting.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::ExportError;
pub use pipeline::{run, ExportSummary, OUTPUT_FILENAME};
pub use writer::{atomic_write, WriteResult};
