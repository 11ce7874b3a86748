//! Load summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};

use crate::commands::LoadOutcome;

pub fn print_summary(outcome: &LoadOutcome) {
    println!("File: {}", outcome.file.display());
    match &outcome.target {
        Some(target) => println!("Documents: {}", target.display()),
        None => println!("Documents: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Records", "Submitted", "Failed"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        count_cell(outcome.report.records),
        count_cell(outcome.report.submitted),
        count_cell(outcome.report.failed),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
