//! Batch archiver: fetch every eligible row's URL into one in-memory archive.
//!
//! Rows are processed strictly in order, one GET at a time. A row is skipped
//! (never retried, never an error) when its URL cell is blank, does not start
//! with `http`, the request fails, or the status is not exactly 200. Skips are
//! kept in the [`BatchReport`] for diagnostics only.

mod outcome;

pub use outcome::{BatchReport, FetchedRow, RowOutcome, SkipReason, SkippedRow};

use crate::config::NamingConfig;
use crate::fetch::Fetcher;
use crate::naming;
use crate::sheet::{Row, Sheet, SheetError};

/// Archive file name offered for `image_<n>` batches.
pub const INDEXED_ARCHIVE_NAME: &str = "bulk_images.zip";
/// Archive file name offered for brand/model batches.
pub const BRAND_MODEL_ARCHIVE_NAME: &str = "brand_model_images.zip";

/// Which columns feed the batch, resolved to positions once per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Entries named `image_<row number><ext>`.
    Indexed { url: usize },
    /// Entries named `<slug(brand)>-<slug(model)><ext>`.
    BrandModel { url: usize, brand: usize, model: usize },
}

impl Selection {
    pub fn indexed(sheet: &Sheet, url_column: &str) -> Result<Self, SheetError> {
        Ok(Selection::Indexed {
            url: sheet.require_column(url_column)?,
        })
    }

    pub fn brand_model(
        sheet: &Sheet,
        url_column: &str,
        brand_column: &str,
        model_column: &str,
    ) -> Result<Self, SheetError> {
        Ok(Selection::BrandModel {
            url: sheet.require_column(url_column)?,
            brand: sheet.require_column(brand_column)?,
            model: sheet.require_column(model_column)?,
        })
    }

    pub fn url_column(&self) -> usize {
        match *self {
            Selection::Indexed { url } | Selection::BrandModel { url, .. } => url,
        }
    }

    pub fn archive_name(&self) -> &'static str {
        match self {
            Selection::Indexed { .. } => INDEXED_ARCHIVE_NAME,
            Selection::BrandModel { .. } => BRAND_MODEL_ARCHIVE_NAME,
        }
    }

    fn entry_name(
        &self,
        row_number: usize,
        row: &Row,
        url: &str,
        naming: &NamingConfig,
    ) -> String {
        match *self {
            Selection::Indexed { .. } => {
                naming::indexed_filename(row_number, url, &naming.indexed_default_ext)
            }
            Selection::BrandModel { brand, model, .. } => naming::brand_model_filename(
                row.get(brand),
                row.get(model),
                url,
                &naming.brand_model_default_ext,
            ),
        }
    }
}

/// Snapshot passed to the progress callback after each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based number of the row just processed.
    pub row: usize,
    pub total: usize,
    pub fetched: usize,
    pub skipped: usize,
}

/// Processes a single row; `row_number` is 1-based.
pub fn process_row<F: Fetcher>(
    fetcher: &F,
    selection: &Selection,
    naming: &NamingConfig,
    row_number: usize,
    row: &Row,
) -> RowOutcome {
    let cell = row.get(selection.url_column());
    if cell.is_missing() {
        return RowOutcome::Skipped(SkipReason::MissingUrl);
    }
    let url = cell.to_text();
    if !url.starts_with("http") {
        return RowOutcome::Skipped(SkipReason::NotHttp { value: url });
    }

    let response = match fetcher.get(&url) {
        Ok(r) => r,
        Err(e) => {
            return RowOutcome::Skipped(SkipReason::Transport {
                url,
                error: e.to_string(),
            })
        }
    };
    if response.status != 200 {
        return RowOutcome::Skipped(SkipReason::Status {
            url,
            status: response.status,
        });
    }

    RowOutcome::Fetched {
        name: selection.entry_name(row_number, row, &url, naming),
        bytes: response.body,
    }
}

/// Runs the whole batch sequentially. Never fails; an empty archive in the
/// report means no image could be downloaded.
pub fn run_batch<F, P>(
    fetcher: &F,
    rows: &[Row],
    selection: &Selection,
    naming: &NamingConfig,
    mut on_progress: P,
) -> BatchReport
where
    F: Fetcher,
    P: FnMut(Progress),
{
    let mut report = BatchReport {
        total_rows: rows.len(),
        ..BatchReport::default()
    };

    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        let outcome = process_row(fetcher, selection, naming, row_number, row);
        report.record(row_number, outcome);
        on_progress(Progress {
            row: row_number,
            total: rows.len(),
            fetched: report.fetched.len(),
            skipped: report.skipped.len(),
        });
    }

    tracing::info!(
        rows = report.total_rows,
        entries = report.archive.len(),
        skipped = report.skipped.len(),
        "batch finished"
    );
    report
}
