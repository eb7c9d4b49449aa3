//! Spreadsheet loading: turns an uploaded CSV or workbook into ordered rows.
//!
//! The first row is the header. Cells are kept as [`CellValue`] so that a
//! blank cell stays distinguishable from an empty string.

mod cell;
mod delimited;
mod error;
mod workbook;

pub use cell::CellValue;
pub use error::SheetError;

use std::path::Path;

/// One data record. Values are positional; use [`Sheet::column_index`] to
/// resolve a header name once and [`Row::get`] per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<CellValue>,
}

impl Row {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// Value at `column`; rows shorter than the header read as missing.
    pub fn get(&self, column: usize) -> &CellValue {
        self.values.get(column).unwrap_or(&CellValue::Missing)
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// Header plus ordered rows of a single worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Opens `path`, choosing the reader by file extension.
    ///
    /// `.csv` goes through the csv reader; `.xlsx`, `.xlsm`, `.xls` and `.ods`
    /// through calamine. `sheet_name` selects a worksheet in a workbook and
    /// defaults to the first one; it is ignored for CSV.
    pub fn open(path: &Path, sheet_name: Option<&str>) -> Result<Sheet, SheetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let sheet = match ext.as_str() {
            "csv" => delimited::read_csv_path(path)?,
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => workbook::read_workbook(path, sheet_name)?,
            _ => return Err(SheetError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(
            path = %path.display(),
            columns = sheet.headers.len(),
            rows = sheet.rows.len(),
            "spreadsheet loaded"
        );
        Ok(sheet)
    }

    /// Reads CSV from any reader (first record is the header).
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Sheet, SheetError> {
        delimited::read_csv(reader)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for a data preview.
    pub fn preview(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`Sheet::column_index`] but fails with the list of available headers.
    pub fn require_column(&self, name: &str) -> Result<usize, SheetError> {
        self.column_index(name)
            .ok_or_else(|| SheetError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.clone(),
            })
    }
}
