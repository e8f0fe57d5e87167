//! Error types for taskboard-export.

use std::path::PathBuf;

use thiserror::Error;

use taskboard_core::ParseError;
use taskboard_renderer::RenderError;

/// All errors that can arise from the export pipeline.
///
/// `Parse` carries the fatal input-validation errors; `Io`/`Render` are
/// environmental. Callers that need to distinguish bad input from a broken
/// environment match on the variant.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Fatal input-validation error from the board parser.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ExportError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.into(),
        source,
    }
}
