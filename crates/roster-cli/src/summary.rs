//! Console rendering for mapping, preview and country tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::SubmissionSummary;
use roster_ingest::TableStructure;
use roster_model::{Country, ParsedRow};
use roster_phone::{PhoneBatchAnalysis, dial_codes};

pub fn print_mapping(structure: &TableStructure) {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Detected Type"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, header) in structure.headers.iter().enumerate() {
        let column_type = structure.mapping.column_type(idx);
        let type_cell = if column_type.is_skip() {
            dim_cell(column_type.label())
        } else {
            Cell::new(column_type.label()).fg(Color::Green)
        };
        table.add_row(vec![Cell::new(idx + 1), Cell::new(header), type_cell]);
    }
    println!("{table}");
    println!("{} data rows", structure.rows.len());
}

pub fn print_analysis(analysis: &PhoneBatchAnalysis, assumed: Option<&Country>) {
    println!(
        "Phones: {} total, {} with dial code, {} needing one",
        analysis.total_phones, analysis.phones_with_code, analysis.phones_needing_code
    );
    if analysis.looks_like_us {
        println!("Batch looks US-formatted");
    }
    match (assumed, &analysis.suggested_country) {
        (Some(country), _) => println!("Assumed country: {country}"),
        (None, Some(country)) => println!("Suggested country: {country} (none assumed)"),
        (None, None) if analysis.phones_needing_code > 0 => {
            println!("No country suggestion; pass --country to assume one");
        }
        (None, None) => {}
    }
}

pub fn print_preview(rows: &[ParsedRow], summary: &SubmissionSummary) {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Email"),
        header_cell("Name"),
        header_cell("Phone"),
        header_cell("Role"),
        header_cell("Errors"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, row) in rows.iter().enumerate() {
        let phone = if row.phone.is_empty() {
            dim_cell("-")
        } else if row.phone_assumed {
            Cell::new(format!("{} (assumed)", row.phone))
        } else {
            Cell::new(&row.phone)
        };
        let errors = if row.errors.is_empty() {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new(row.errors.join("; ")).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&row.email),
            Cell::new(&row.name),
            phone,
            Cell::new(row.role.as_str()),
            errors,
        ]);
    }
    println!("{table}");
    println!(
        "{} rows ready to invite, {} excluded with errors",
        summary.valid, summary.excluded
    );
}

pub fn print_countries() {
    let mut table = new_table();
    table.set_header(vec![header_cell("Country"), header_cell("Dial Code")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for code in dial_codes() {
        table.add_row(vec![Cell::new(code.alpha2), Cell::new(code.dial())]);
    }
    println!("{table}");
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
