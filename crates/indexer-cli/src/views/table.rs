use comfy_table::{Cell, Color, Row, Table};
use serde_json::{Map, Value};

pub fn display_records(columns: &[&str], records: &[Map<String, Value>]) {
    if records.is_empty() {
        println!("No actions found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(columns.to_vec());

    for record in records {
        let mut row = Row::new();
        for column in columns {
            let value = record.get(*column).unwrap_or(&Value::Null);
            let mut cell = Cell::new(cell_text(value));
            if *column == "status" {
                cell = style_status_cell(cell, value);
            }
            row.add_cell(cell);
        }
        table.add_row(row);
    }

    println!("{table}");
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn style_status_cell(cell: Cell, value: &Value) -> Cell {
    match value.as_str() {
        Some("success") => cell.fg(Color::Green),
        Some("failed") => cell.fg(Color::Red),
        Some("canceled") => cell.fg(Color::DarkGrey),
        Some("queued") => cell.fg(Color::Yellow),
        _ => cell,
    }
}
