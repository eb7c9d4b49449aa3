//! `bulkimg columns <file>` – list headers and preview the first rows.

use anyhow::Result;
use bulkimg_core::sheet::{Row, Sheet};
use std::path::Path;

use super::archive::open_sheet;

pub fn run_columns(path: &Path, sheet_name: Option<&str>, preview: usize) -> Result<()> {
    let sheet = open_sheet(path, sheet_name)?;
    print!("{}", render_columns(&sheet, preview));
    Ok(())
}

fn render_columns(sheet: &Sheet, preview: usize) -> String {
    let mut out = format!("{} rows, {} columns\n", sheet.len(), sheet.headers().len());
    for (i, h) in sheet.headers().iter().enumerate() {
        out.push_str(&format!("{:>3}  {}\n", i + 1, h));
    }
    let rows = sheet.preview(preview);
    if !rows.is_empty() {
        out.push_str("\nData preview:\n");
        out.push_str(&sheet.headers().join("\t"));
        out.push('\n');
        for row in rows {
            out.push_str(&render_row(row, sheet.headers().len()));
            out.push('\n');
        }
    }
    out
}

fn render_row(row: &Row, width: usize) -> String {
    (0..width.max(row.values().len()))
        .map(|i| row.get(i).to_text())
        .collect::<Vec<_>>()
        .join("\t")
}
