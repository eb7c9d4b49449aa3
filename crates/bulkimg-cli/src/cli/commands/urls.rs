//! `bulkimg urls <file> --column <COL>` – one URL column, entries named by row.

use anyhow::Result;
use bulkimg_core::batch::Selection;
use bulkimg_core::config::BulkConfig;
use std::path::Path;

use super::archive::{open_sheet, run_archive};
use crate::cli::BatchArgs;

pub async fn run_urls(cfg: &BulkConfig, path: &Path, column: &str, args: &BatchArgs) -> Result<()> {
    let sheet = open_sheet(path, args.sheet.as_deref())?;
    let selection = Selection::indexed(&sheet, column)?;
    tracing::info!(path = %path.display(), column, rows = sheet.len(), "starting url batch");
    run_archive(cfg, sheet, selection, args).await
}
