//! # taskboard-renderer
//!
//! Tera-based markup rendering for organized boards: the inner board markup
//! (columns and cards) and the HTML document shell that wraps it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard_core::{organize, parse_document};
//! use taskboard_renderer::{Renderer, Theme};
//!
//! fn render(input: &str) -> Option<String> {
//!     let document = parse_document(input).ok()?;
//!     let board = organize(&document);
//!     let renderer = Renderer::new().ok()?;
//!     renderer.render_page(&board, Theme::default()).ok()
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod theme;

pub use context::{BoardCtx, CardCtx, ColumnCtx, MetaCtx, PageContext};
pub use engine::Renderer;
pub use error::RenderError;
pub use theme::Theme;
