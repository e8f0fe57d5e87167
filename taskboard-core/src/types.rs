//! Domain types for the taskboard pipeline.
//!
//! Every record here is a flat immutable value: build once, hand off, never
//! mutate. Cross-references (task → phase/person/category) are resolved by
//! name at build time and stored as owned copies of the referenced record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a board phase (column).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhaseName(pub String);

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PhaseName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PhaseName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a person assignable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonName(pub String);

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PersonName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PersonName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a task category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryName(pub String);

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tag — transient parse output
// ---------------------------------------------------------------------------

/// One parsed input line: `name: value | key=val | key=val`.
///
/// Tags exist only between the line parser and the domain builder; they are
/// never part of a built [`Document`]. Later duplicate attribute keys
/// overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: String,
    pub attributes: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A board column with a work-in-progress limit.
///
/// Declaration order in the input defines left-to-right column order on the
/// rendered board; it is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: PhaseName,
    pub wip_limit: u32,
}

/// A person tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: PersonName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A task category with an optional card background color.
///
/// `Ord` by name (then color) — categories double as the secondary sort key
/// when ordering tasks inside a column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A card: one task belonging to exactly one phase.
///
/// `phase_dates` holds one entry per *declared* phase (not just this task's
/// own), recording when the task entered each phase; values stay opaque
/// strings taken verbatim from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub phase: Phase,
    pub description: String,
    pub phase_dates: BTreeMap<PhaseName, Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// The domain builder's output: everything a board input file declares, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub phases: Vec<Phase>,
    pub people: Vec<Person>,
    pub categories: Vec<Category>,
    pub tasks: Vec<Task>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
