use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use drawing_cli::types::{FolderResult, OffsetSource};
use drawing_map::MappingSummary;
use drawing_model::{IndexEntry, Mapping, classify_discipline};
use drawing_report::RenameReport;

pub fn print_summary(result: &FolderResult) {
    println!("Folder: {}", result.folder.display());
    match &result.index_source {
        Some(path) => println!("Index: {}", path.display()),
        None => println!("Index: (none)"),
    }
    println!(
        "Drawings: {} recognized, {} unrecognized",
        result.recognized.len(),
        result.unrecognized.len()
    );
    println!("Alignment: {} ({})", result.policy, offset_label(result));

    if !result.index_entries.is_empty() {
        println!();
        println!("Index entries:");
        println!("{}", index_table(&result.index_entries));
    }
    println!();
    println!("Preview:");
    println!("{}", preview_table(&result.mappings));

    let summary = MappingSummary::from_mappings(&result.mappings);
    println!(
        "{} of {} files will be renamed, {} unchanged",
        summary.renamed, summary.total, summary.unchanged
    );
    if !result.unrecognized.is_empty() {
        eprintln!("Unrecognized files:");
        for name in &result.unrecognized {
            eprintln!("- {name}");
        }
    }
}

pub fn print_rename_report(report: &RenameReport) {
    println!("Renamed {} files", report.renamed.len());
    for name in &report.skipped_existing {
        eprintln!("- skipped {name}: target already exists");
    }
}

fn offset_label(result: &FolderResult) -> String {
    match (result.offset, result.offset_source) {
        (Some(offset), OffsetSource::Manual) => format!("first drawing {offset}, manual"),
        (Some(offset), _) => format!("first drawing {offset}, detected"),
        (None, _) => "first drawing undetermined".to_string(),
    }
}

fn index_table(entries: &[IndexEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Sheet"),
        header_cell("Title"),
        header_cell("Discipline"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, entry) in entries.iter().enumerate() {
        let discipline = classify_discipline(&entry.sheet_number);
        let discipline_cell = if discipline.is_known() {
            Cell::new(discipline.name)
        } else {
            dim_cell(discipline.name)
        };
        table.add_row(vec![
            dim_cell(position + 1),
            sheet_cell(&entry.sheet_number),
            Cell::new(&entry.sheet_title),
            discipline_cell,
        ]);
    }
    table
}

fn preview_table(mappings: &[Mapping]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Current name"),
        header_cell("Sheet"),
        header_cell("Title"),
        header_cell("New name"),
    ]);
    apply_preview_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for mapping in mappings {
        let new_name_cell = if mapping.is_renamed() {
            Cell::new(&mapping.new_name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("(unchanged)")
        };
        table.add_row(vec![
            Cell::new(&mapping.file.print_order),
            Cell::new(mapping.original_name()),
            mapping
                .sheet_number
                .as_deref()
                .map_or_else(|| dim_cell("-"), sheet_cell),
            mapping
                .sheet_title
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            new_name_cell,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn sheet_cell(sheet_number: &str) -> Cell {
    Cell::new(sheet_number)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
