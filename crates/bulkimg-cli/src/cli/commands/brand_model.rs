//! `bulkimg brand-model <file>` – URL column plus brand/model label columns.

use anyhow::Result;
use bulkimg_core::batch::Selection;
use bulkimg_core::config::BulkConfig;
use std::path::Path;

use super::archive::{open_sheet, run_archive};
use crate::cli::BatchArgs;

pub async fn run_brand_model(
    cfg: &BulkConfig,
    path: &Path,
    url_column: &str,
    brand_column: &str,
    model_column: &str,
    args: &BatchArgs,
) -> Result<()> {
    let sheet = open_sheet(path, args.sheet.as_deref())?;
    let selection = Selection::brand_model(&sheet, url_column, brand_column, model_column)?;
    tracing::info!(
        path = %path.display(),
        url_column,
        brand_column,
        model_column,
        rows = sheet.len(),
        "starting brand/model batch"
    );
    run_archive(cfg, sheet, selection, args).await
}
