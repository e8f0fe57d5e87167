//! Board organizer: grouped, sorted, wip-checked columns.

use serde::{Deserialize, Serialize};

use crate::types::{Document, Phase, Task};

// ---------------------------------------------------------------------------
// Board structs
// ---------------------------------------------------------------------------

/// One board column: a phase plus its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub phase: Phase,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Number of tasks currently in this column.
    pub fn occupancy(&self) -> usize {
        self.tasks.len()
    }

    /// True when occupancy exceeds the phase's wip limit. A display flag
    /// only — the input is a fixed snapshot, nothing gets blocked.
    pub fn over_limit(&self) -> bool {
        self.occupancy() > self.phase.wip_limit as usize
    }
}

/// The organized board: columns in phase declaration order, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    pub columns: Vec<Column>,
}

// ---------------------------------------------------------------------------
// organize
// ---------------------------------------------------------------------------

/// Group the document's tasks into columns and sort each column.
///
/// Sort key: priority ascending, then category (`None` before any category,
/// categories by name). The sort is stable, so ties beyond that keep input
/// order. Column order is phase declaration order, never re-sorted.
pub fn organize(document: &Document) -> Board {
    let columns = document
        .phases
        .iter()
        .map(|phase| {
            let mut tasks: Vec<Task> = document
                .tasks
                .iter()
                .filter(|t| t.phase.name == phase.name)
                .cloned()
                .collect();
            tasks.sort_by(|a, b| {
                a.priority
                    .cmp(&b.priority)
                    .then_with(|| a.category.cmp(&b.category))
            });
            Column {
                phase: phase.clone(),
                tasks,
            }
        })
        .collect();

    Board {
        title: document.title.clone(),
        columns,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
