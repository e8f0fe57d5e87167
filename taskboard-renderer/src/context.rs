//! Rendering context — serializable payload built from a [`Board`].
//!
//! The context is a flattened, display-oriented view: columns carry their
//! occupancy and over-limit flag precomputed, cards carry the resolved
//! person/category names and the ready-made `style` attribute value. The
//! templates make no decisions beyond presence checks.

use serde::{Deserialize, Serialize};

use taskboard_core::{Board, Task};

use crate::error::RenderError;
use crate::theme::Theme;

/// Full payload for the page shell (and, within it, the board markup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub title: String,
    /// Extra CSS injected into the shell's inline `<style>` block.
    pub styles: String,
    pub theme: Theme,
    pub board: BoardCtx,
    pub meta: MetaCtx,
}

/// The organized board, display-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCtx {
    pub columns: Vec<ColumnCtx>,
}

/// One rendered column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnCtx {
    pub name: String,
    pub occupancy: usize,
    pub wip_limit: u32,
    pub over_limit: bool,
    pub cards: Vec<CardCtx>,
}

/// One rendered card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCtx {
    pub description: String,
    pub person: Option<String>,
    pub priority: i32,
    pub category: Option<String>,
    /// Inline `style` attribute value (`background:<color>;`) when the
    /// task's category carries a color.
    pub style: Option<String>,
}

/// Generator info rendered into the page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub version: String,
}

impl PageContext {
    /// Build a [`PageContext`] from an organized board and a theme.
    pub fn new(board: &Board, theme: Theme) -> Self {
        let columns = board
            .columns
            .iter()
            .map(|column| ColumnCtx {
                name: column.phase.name.to_string(),
                occupancy: column.occupancy(),
                wip_limit: column.phase.wip_limit,
                over_limit: column.over_limit(),
                cards: column.tasks.iter().map(card_ctx).collect(),
            })
            .collect();

        PageContext {
            title: board.title.clone(),
            styles: String::new(),
            theme,
            board: BoardCtx { columns },
            meta: MetaCtx {
                version: env!("CARGO_PKG_VERSION").to_owned(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn card_ctx(task: &Task) -> CardCtx {
    CardCtx {
        description: task.description.clone(),
        person: task.person.as_ref().map(|p| p.name.to_string()),
        priority: task.priority,
        category: task.category.as_ref().map(|c| c.name.to_string()),
        style: task
            .category
            .as_ref()
            .and_then(|c| c.color.as_deref())
            .map(|color| format!("background:{color};")),
    }
}
