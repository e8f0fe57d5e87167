//! Console board report — the text twin of the rendered HTML page.
//!
//! Pure formatting over the organized [`Board`]; makes no decisions and
//! returns nothing. Generated from the same data the HTML renderer consumes
//! but entirely independent of it.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use taskboard_core::{Board, Column};

#[derive(Tabled)]
struct PhaseRow {
    #[tabled(rename = "phase")]
    phase: String,
    #[tabled(rename = "tasks")]
    tasks: usize,
    #[tabled(rename = "wip limit")]
    wip_limit: u32,
    #[tabled(rename = "status")]
    status: String,
}

fn status_label(column: &Column) -> &'static str {
    if column.over_limit() {
        "OVER LIMIT"
    } else {
        "ok"
    }
}

/// Print the whole board: a phase summary table, then each phase's tasks in
/// display order with their person/priority/category details.
pub fn print_board(board: &Board) {
    println!("{}", board.title.bold());

    let rows: Vec<PhaseRow> = board
        .columns
        .iter()
        .map(|column| PhaseRow {
            phase: column.phase.name.to_string(),
            tasks: column.occupancy(),
            wip_limit: column.phase.wip_limit,
            status: status_label(column).to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!();

    for column in &board.columns {
        let heading = format!(
            "{} - {} / {}",
            column.phase.name.to_string().to_uppercase(),
            column.occupancy(),
            column.phase.wip_limit
        );
        if column.over_limit() {
            println!("{}", heading.red().bold());
        } else {
            println!("{}", heading.bold());
        }
        println!("{}", "-".repeat(heading.len()));

        for task in &column.tasks {
            println!("- {}", task.description);
            if let Some(person) = &task.person {
                println!("  - person: {}", person.name);
            }
            println!("  - priority: {}", task.priority);
            if let Some(category) = &task.category {
                println!("  - category: {}", category.name);
            }
        }
        println!();
    }
}
