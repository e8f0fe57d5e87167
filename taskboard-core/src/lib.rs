//! Taskboard core library — tag parsing, domain building, board organization.
//!
//! The pipeline runs strictly left to right, each stage consuming only the
//! typed output of its predecessor:
//!
//! ```text
//! raw text → Vec<Tag> → Document → Board
//! ```
//!
//! Public API surface:
//! - [`tag`] — line-tag parser and the best-effort numeric parse
//! - [`document`] — domain builder ([`parse_document`] / [`build_document`])
//! - [`board`] — organizer ([`organize`])
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ParseError`]

pub mod board;
pub mod document;
pub mod error;
pub mod tag;
pub mod types;

pub use board::{organize, Board, Column};
pub use document::{build_document, parse_document};
pub use error::ParseError;
pub use types::{
    Category, CategoryName, Document, Person, PersonName, Phase, PhaseName, Tag, Task,
};
