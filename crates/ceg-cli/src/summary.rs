use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ceg_cli::types::{EntityInspection, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_root.display());
    } else {
        println!("Output: {}", result.output_root.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Logical name"),
        header_cell("File"),
        header_cell("Fields"),
        header_cell("Enums"),
        header_cell("Flags"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    let mut total_fields = 0usize;
    let mut total_enums = 0usize;
    let mut total_flags = 0usize;
    for entity in &result.entities {
        total_fields += entity.fields;
        total_enums += entity.enums;
        total_flags += entity.flag_holders;
        table.add_row(vec![
            Cell::new(entity.display_name.as_deref().unwrap_or(&entity.logical_name)),
            dim_cell(&entity.logical_name),
            Cell::new(format!("{}.ts", entity.name)),
            Cell::new(entity.fields),
            count_cell(entity.enums),
            count_cell(entity.flag_holders),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.files_label()).add_attribute(Attribute::Bold),
        Cell::new(total_fields).add_attribute(Attribute::Bold),
        Cell::new(total_enums).add_attribute(Attribute::Bold),
        Cell::new(total_flags).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_inspection(rows: &[EntityInspection]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Logical name"),
        header_cell("Display name"),
        header_cell("Artifact"),
        header_cell("Attributes"),
        header_cell("With options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in rows {
        let artifact = match &row.name {
            Ok(name) if row.collides => Cell::new(format!("{name} (collision)")).fg(Color::Red),
            Ok(name) => Cell::new(name),
            Err(reason) => Cell::new(reason).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&row.logical_name),
            row.display_name
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            artifact,
            Cell::new(row.attributes),
            count_cell(row.option_attributes),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
