//! Table and text rendering for catalogs and view states.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use iia_model::{AreaDescription, Catalog, ViewState};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Every catalog record: code, name, term, set, prerequisite.
pub fn modules_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Term"),
        header_cell("Set"),
        header_cell("Prerequisite"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for module in catalog.modules() {
        let code = if module.management {
            Cell::new(&module.code).fg(Color::Magenta)
        } else {
            Cell::new(&module.code)
        };
        table.add_row(vec![
            code,
            Cell::new(&module.name),
            Cell::new(module.term),
            Cell::new(module.set),
            module
                .prerequisite
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

/// Areas with their registered rule and listed codes.
pub fn areas_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Area"),
        header_cell("Rule"),
        header_cell("Codes"),
    ]);
    apply_table_style(&mut table);
    for area in catalog.areas() {
        table.add_row(vec![
            Cell::new(&area.name),
            Cell::new(&area.rule),
            Cell::new(area.codes.join(" ")),
        ]);
    }
    table
}

/// Per-record selection and availability.
pub fn view_table(catalog: &Catalog, view: &ViewState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Term"),
        header_cell("Set"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (module, state) in catalog.modules().iter().zip(&view.modules) {
        let status = if state.selected {
            Cell::new("selected")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else if state.available {
            Cell::new("available")
        } else {
            dim_cell("unavailable")
        };
        table.add_row(vec![
            Cell::new(&module.code),
            Cell::new(&module.name),
            Cell::new(module.term),
            Cell::new(module.set),
            status,
        ]);
    }
    table
}

pub fn eligibility_table(view: &ViewState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Area"), header_cell("Eligible")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for area in &view.areas {
        let eligible = if area.eligible {
            Cell::new("yes")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![Cell::new(&area.name), eligible]);
    }
    table
}

/// One-line summary of the selection and the areas it qualifies for.
pub fn selection_line(view: &ViewState) -> String {
    let codes = view.selected_codes();
    let selected = if codes.is_empty() {
        "none".to_string()
    } else {
        codes.join(" ")
    };
    let areas = view.eligible_areas();
    let eligible = if areas.is_empty() {
        "none".to_string()
    } else {
        areas.join(", ")
    };
    format!(
        "selected ({}): {selected}\neligible: {eligible}",
        codes.len()
    )
}

pub fn describe_text(description: &AreaDescription) -> String {
    format!(
        "{}\n{}\nrule: {}\ncodes: {}",
        description.name,
        description.description,
        description.rule,
        description.codes.join(" ")
    )
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
