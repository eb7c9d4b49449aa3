//! CSV input.

use super::{CellValue, Row, Sheet, SheetError};
use std::io::Read;
use std::path::Path;

pub(super) fn read_csv_path(path: &Path) -> Result<Sheet, SheetError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_csv(file)
}

/// Reads CSV with a header record. Rows may be ragged; empty fields become
/// [`CellValue::Missing`] and everything else stays text.
pub(super) fn read_csv<R: Read>(reader: R) -> Result<Sheet, SheetError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let values = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(field.to_string())
                }
            })
            .collect();
        rows.push(Row::new(values));
    }

    Ok(Sheet::new(headers, rows))
}
