//! Per-row results and the batch report they fold into.

use crate::archive::Archive;
use serde::Serialize;
use std::fmt;

/// Why a row contributed no archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// URL cell is blank.
    MissingUrl,
    /// URL text does not start with `http`.
    NotHttp { value: String },
    /// The request never produced a status (timeout, DNS, refused, bad URL).
    Transport { url: String, error: String },
    /// Completed with a status other than 200.
    Status { url: String, status: u32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingUrl => write!(f, "missing URL"),
            SkipReason::NotHttp { value } => write!(f, "not an HTTP URL: {:?}", value),
            SkipReason::Transport { url, error } => write!(f, "GET {} failed: {}", url, error),
            SkipReason::Status { url, status } => write!(f, "GET {} returned HTTP {}", url, status),
        }
    }
}

/// Result of processing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Fetched { name: String, bytes: Vec<u8> },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedRow {
    /// 1-based row number (data rows, header excluded).
    pub row: usize,
    pub name: String,
    pub size: usize,
    /// True when this entry overwrote an earlier one with the same name.
    pub replaced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// Archive plus what happened to every row.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    #[serde(skip)]
    pub archive: Archive,
    pub total_rows: usize,
    pub fetched: Vec<FetchedRow>,
    pub skipped: Vec<SkippedRow>,
}

impl BatchReport {
    /// True when no image could be downloaded at all.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    pub(super) fn record(&mut self, row: usize, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Fetched { name, bytes } => {
                let size = bytes.len();
                let replaced = self.archive.insert(name.clone(), bytes);
                self.fetched.push(FetchedRow {
                    row,
                    name,
                    size,
                    replaced,
                });
            }
            RowOutcome::Skipped(reason) => {
                tracing::debug!(row, %reason, "row skipped");
                self.skipped.push(SkippedRow { row, reason });
            }
        }
    }
}
