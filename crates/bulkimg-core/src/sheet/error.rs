use thiserror::Error;

/// Fatal spreadsheet errors; these abort before any row is fetched.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("unsupported spreadsheet format: {0} (expected .csv, .xlsx, .xlsm, .xls, .xlsb or .ods)")]
    UnsupportedFormat(String),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("worksheet {0:?} not found")]
    WorksheetNotFound(String),

    #[error("workbook has no worksheets")]
    NoWorksheets,

    #[error("column {name:?} not found (available: {})", available.join(", "))]
    UnknownColumn { name: String, available: Vec<String> },
}
