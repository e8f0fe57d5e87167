//! Domain builder: ordered tag sequence → typed [`Document`].
//!
//! Two passes over the tags. The first collects the declarations (`title`,
//! `phase`, `person`, `category`) so the lookup tables are complete before
//! any task is built; the second turns every remaining tag into a task.
//! This is what lets a task line appear above the phase that declares its
//! column.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::tag::{parse_line, parse_or};
use crate::types::{
    Category, CategoryName, Document, Person, PersonName, Phase, PhaseName, Tag, Task,
};

/// Tag names that declare records instead of tasks.
const DECLARATION_TAGS: [&str; 4] = ["title", "phase", "person", "category"];

/// Default task priority when the attribute is absent or unparseable.
const DEFAULT_PRIORITY: i32 = 10;

// ---------------------------------------------------------------------------
// Parsing entry points
// ---------------------------------------------------------------------------

/// Parse a full board input text into a [`Document`].
///
/// Candidate lines (those containing `:`) are parsed to tags in order; the
/// first fatal error aborts. See [`build_document`] for the tag semantics.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let mut tags = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        if let Some(tag) = parse_line(raw, idx + 1)? {
            tags.push(tag);
        }
    }
    build_document(&tags)
}

/// Interpret an ordered tag sequence as a board document.
///
/// - `title` — value of the first `title` tag; none at all is fatal.
/// - `phase` / `person` / `category` — one record per tag, in input order.
///   The first declaration of a name wins; later duplicates are skipped.
/// - every other tag is a task and must name a declared phase.
pub fn build_document(tags: &[Tag]) -> Result<Document, ParseError> {
    let title = tags
        .iter()
        .find(|t| t.name == "title")
        .map(|t| t.value.clone())
        .ok_or(ParseError::MissingTitle)?;

    let mut phases: Vec<Phase> = Vec::new();
    for tag in tags.iter().filter(|t| t.name == "phase") {
        let name = PhaseName::from(tag.value.as_str());
        if phases.iter().any(|p| p.name == name) {
            continue;
        }
        phases.push(Phase {
            name,
            wip_limit: parse_or(tag.attributes.get("wiplimit").map(String::as_str), 0),
        });
    }

    let mut people: Vec<Person> = Vec::new();
    for tag in tags.iter().filter(|t| t.name == "person") {
        let name = PersonName::from(tag.value.as_str());
        if people.iter().any(|p| p.name == name) {
            continue;
        }
        people.push(Person {
            name,
            image: tag.attributes.get("image").cloned(),
        });
    }

    let mut categories: Vec<Category> = Vec::new();
    for tag in tags.iter().filter(|t| t.name == "category") {
        let name = CategoryName::from(tag.value.as_str());
        if categories.iter().any(|c| c.name == name) {
            continue;
        }
        categories.push(Category {
            name,
            color: tag.attributes.get("color").cloned(),
        });
    }

    // Lookup tables, built once per collection. Task construction below does
    // index reads, never list scans.
    let phase_index: BTreeMap<&str, &Phase> =
        phases.iter().map(|p| (p.name.0.as_str(), p)).collect();
    let person_index: BTreeMap<&str, &Person> =
        people.iter().map(|p| (p.name.0.as_str(), p)).collect();
    let category_index: BTreeMap<&str, &Category> =
        categories.iter().map(|c| (c.name.0.as_str(), c)).collect();

    let mut tasks = Vec::new();
    for tag in tags.iter().filter(|t| !DECLARATION_TAGS.contains(&t.name.as_str())) {
        let phase = phase_index
            .get(tag.name.as_str())
            .ok_or_else(|| ParseError::UnknownPhase { name: tag.name.clone() })?;
        tasks.push(build_task(tag, phase, &phases, &person_index, &category_index));
    }

    Ok(Document {
        title,
        phases,
        people,
        categories,
        tasks,
    })
}

// ---------------------------------------------------------------------------
// Task construction
// ---------------------------------------------------------------------------

fn build_task(
    tag: &Tag,
    phase: &Phase,
    phases: &[Phase],
    person_index: &BTreeMap<&str, &Person>,
    category_index: &BTreeMap<&str, &Category>,
) -> Task {
    // One entry per declared phase, present or not — the task's movement
    // history across the whole board.
    let phase_dates: BTreeMap<PhaseName, Option<String>> = phases
        .iter()
        .map(|p| (p.name.clone(), tag.attributes.get(p.name.0.as_str()).cloned()))
        .collect();

    // Unknown person/category names silently mean "unset".
    let person = tag
        .attributes
        .get("person")
        .and_then(|name| person_index.get(name.as_str()))
        .map(|p| (*p).clone());
    let category = tag
        .attributes
        .get("category")
        .and_then(|name| category_index.get(name.as_str()))
        .map(|c| (*c).clone());

    Task {
        phase: phase.clone(),
        description: tag.value.clone(),
        phase_dates,
        person,
        priority: parse_or(
            tag.attributes.get("priority").map(String::as_str),
            DEFAULT_PRIORITY,
        ),
        category,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
