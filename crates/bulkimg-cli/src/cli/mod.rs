//! CLI for bulkimg.

mod commands;
mod state;

use anyhow::Result;
use bulkimg_core::config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_brand_model, run_columns, run_urls};

pub use state::exit_message;

/// Top-level CLI for bulkimg.
#[derive(Debug, Parser)]
#[command(name = "bulkimg")]
#[command(about = "bulkimg: download the image URLs of a spreadsheet into a ZIP archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by the archive-producing subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct BatchArgs {
    /// Worksheet to read (workbooks only; defaults to the first sheet).
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Where to write the ZIP (defaults to the subcommand's archive name in the current directory).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a JSON report of fetched and skipped rows.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the columns of a spreadsheet and preview its first rows.
    Columns {
        /// Spreadsheet file (.csv, .xlsx, .xlsm, .xls, .xlsb, .ods).
        path: PathBuf,

        /// Worksheet to read (workbooks only).
        #[arg(long, value_name = "NAME")]
        sheet: Option<String>,

        /// Number of data rows to preview.
        #[arg(long, default_value = "5", value_name = "N")]
        preview: usize,
    },

    /// Download a column of image URLs into bulk_images.zip as image_<row>.<ext>.
    Urls {
        /// Spreadsheet file.
        path: PathBuf,

        /// Column holding the image URLs.
        #[arg(long, value_name = "COLUMN")]
        column: String,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Download image URLs into brand_model_images.zip as <brand>-<model>.<ext>.
    BrandModel {
        /// Spreadsheet file.
        path: PathBuf,

        /// Column holding the image URLs.
        #[arg(long, value_name = "COLUMN")]
        url_column: String,

        /// Column holding the brand label.
        #[arg(long, value_name = "COLUMN")]
        brand_column: String,

        /// Column holding the model label.
        #[arg(long, value_name = "COLUMN")]
        model_column: String,

        #[command(flatten)]
        batch: BatchArgs,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Columns {
                path,
                sheet,
                preview,
            } => run_columns(&path, sheet.as_deref(), preview)?,
            CliCommand::Urls {
                path,
                column,
                batch,
            } => run_urls(&cfg, &path, &column, &batch).await?,
            CliCommand::BrandModel {
                path,
                url_column,
                brand_column,
                model_column,
                batch,
            } => {
                run_brand_model(
                    &cfg,
                    &path,
                    &url_column,
                    &brand_column,
                    &model_column,
                    &batch,
                )
                .await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
