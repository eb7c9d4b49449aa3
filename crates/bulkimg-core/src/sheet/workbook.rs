//! Excel / OpenDocument input via calamine.

use super::{CellValue, Row, Sheet, SheetError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub(super) fn read_workbook(path: &Path, sheet_name: Option<&str>) -> Result<Sheet, SheetError> {
    let mut workbook = open_workbook_auto(path)?;

    let name = match sheet_name {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(SheetError::WorksheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(SheetError::NoWorksheets)?,
    };

    let range = workbook.worksheet_range(&name)?;
    let mut raw_rows = range.rows();

    let headers = match raw_rows.next() {
        Some(header) => header.iter().map(|c| cell_value(c).to_text().trim().to_string()).collect(),
        None => Vec::new(),
    };
    let rows = raw_rows
        .map(|r| Row::new(r.iter().map(cell_value).collect()))
        .collect();

    Ok(Sheet::new(headers, rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(s) if s.trim().is_empty() => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}
