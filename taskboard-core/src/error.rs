//! Error types for taskboard-core.

use thiserror::Error;

/// Fatal input-validation errors raised while parsing a board document.
///
/// Every variant aborts the whole run — there is no partial output or
/// recovery mode. Unresolvable person/category references and unparseable
/// numeric attributes are deliberately *not* errors; they degrade silently
/// to documented defaults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An attribute segment without `=` — unrecoverable input corruption.
    #[error("malformed attribute segment '{segment}' on line {line}: expected key=value")]
    MalformedAttribute { line: usize, segment: String },

    /// No `title` tag anywhere in the input.
    #[error("no title specified: input must contain a 'title:' line")]
    MissingTitle,

    /// A task tag named a phase that was never declared.
    #[error("invalid phase '{name}'")]
    UnknownPhase { name: String },
}
