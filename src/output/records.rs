use comfy_table::{Cell, Color};

use crate::consts::DATETIME_FORMAT;
use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::store::TaskRecord;

fn stamp_text(record: &TaskRecord) -> Option<String> {
    record
        .stamp()
        .map(|stamp| stamp.format(DATETIME_FORMAT).to_string())
}

pub(crate) fn print_record_table(records: &[TaskRecord], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Started", use_color),
        header_cell("Project", use_color),
        header_cell("Record", use_color),
    ]);

    let project_color = if use_color { Some(Color::Green) } else { None };
    for record in records {
        table.add_row(vec![
            Cell::new(stamp_text(record).unwrap_or_default()),
            styled_cell(record.project().unwrap_or_default(), project_color),
            Cell::new(record.path().display()),
        ]);
    }

    println!("{table}");
    println!("{} records", records.len());
}

pub(crate) fn output_record_json(records: &[TaskRecord]) -> String {
    let output: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            serde_json::json!({
                "path": record.path().to_string_lossy(),
                "file": record.file_name(),
                "project": record.project(),
                "started": stamp_text(record),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
