//! Shared runner for `bulkimg urls` and `bulkimg brand-model`: run the batch,
//! write the ZIP, report the outcome.

use anyhow::{Context, Result};
use bulkimg_core::batch::{self, BatchReport, Selection};
use bulkimg_core::config::BulkConfig;
use bulkimg_core::fetch::CurlFetcher;
use bulkimg_core::sheet::Sheet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::state::{BatchState, NoImages};
use crate::cli::BatchArgs;

const PROGRESS_INTERVAL_MS: u128 = 200;

pub(super) fn open_sheet(path: &Path, sheet: Option<&str>) -> Result<Sheet> {
    Sheet::open(path, sheet).with_context(|| format!("read spreadsheet {}", path.display()))
}

pub(super) async fn run_archive(
    cfg: &BulkConfig,
    sheet: Sheet,
    selection: Selection,
    args: &BatchArgs,
) -> Result<()> {
    let output = output_path(args, &selection);
    BatchState::started(sheet.len()).draw();

    let fetcher = CurlFetcher::from_config(cfg);
    let naming = cfg.naming.clone();
    let report = tokio::task::spawn_blocking(move || {
        let mut last_draw = Instant::now();
        batch::run_batch(&fetcher, sheet.rows(), &selection, &naming, |p| {
            if last_draw.elapsed().as_millis() >= PROGRESS_INTERVAL_MS || p.row == p.total {
                BatchState::from_progress(p).draw();
                last_draw = Instant::now();
            }
        })
    })
    .await
    .context("batch worker failed")?;

    if let Some(report_path) = &args.report {
        write_report(&report, report_path)?;
    }

    if report.is_empty() {
        BatchState::Failed.draw();
        return Err(NoImages.into());
    }

    report
        .archive
        .write_to(&output)
        .with_context(|| format!("write archive {}", output.display()))?;
    BatchState::Done {
        path: output,
        entries: report.archive.len(),
        skipped: report.skipped.len(),
    }
    .draw();
    Ok(())
}

fn output_path(args: &BatchArgs, selection: &Selection) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(selection.archive_name()))
}

fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize batch report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    tracing::info!("batch report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::state::NO_IMAGES_MESSAGE;

    #[test]
    fn output_defaults_to_archive_name() {
        let args = BatchArgs::default();
        assert_eq!(
            output_path(&args, &Selection::Indexed { url: 0 }),
            PathBuf::from("bulk_images.zip")
        );
        assert_eq!(
            output_path(
                &args,
                &Selection::BrandModel {
                    url: 0,
                    brand: 1,
                    model: 2
                }
            ),
            PathBuf::from("brand_model_images.zip")
        );
        let args = BatchArgs {
            output: Some(PathBuf::from("/tmp/cars.zip")),
            ..BatchArgs::default()
        };
        assert_eq!(
            output_path(&args, &Selection::Indexed { url: 0 }),
            PathBuf::from("/tmp/cars.zip")
        );
    }

    #[test]
    fn report_json_lists_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let sheet = Sheet::from_csv_reader("url\n\nftp://x\n".as_bytes()).unwrap();
        let selection = Selection::indexed(&sheet, "url").unwrap();
        let report = batch::run_batch(
            &CurlFetcher::from_config(&BulkConfig::default()),
            sheet.rows(),
            &selection,
            &BulkConfig::default().naming,
            |_| {},
        );
        write_report(&report, &path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["total_rows"], 1);
        assert_eq!(json["skipped"][0]["reason"]["kind"], "not_http");
        assert!(json.get("archive").is_none());
    }

    #[tokio::test]
    async fn empty_batch_fails_without_writing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.zip");
        let sheet = Sheet::from_csv_reader("url\nnot-a-url\n".as_bytes()).unwrap();
        let selection = Selection::indexed(&sheet, "url").unwrap();
        let args = BatchArgs {
            output: Some(out.clone()),
            ..BatchArgs::default()
        };
        let err = run_archive(&BulkConfig::default(), sheet, selection, &args)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<NoImages>().is_some());
        assert_eq!(err.to_string(), NO_IMAGES_MESSAGE);
        assert!(!out.exists());
    }
}
