//! Batch state as shown to the user.
//!
//! A batch moves Running -> Done | Failed. Each state renders one
//! status line; the terminal is redrawn per transition.

use bulkimg_core::batch::Progress;
use std::path::PathBuf;

/// Message shown when a batch produced no archive entries.
pub const NO_IMAGES_MESSAGE: &str = "No valid images could be downloaded.";

/// A batch ended without entries. The Failed line is already on screen when
/// this is returned, so it is not printed again on exit.
#[derive(Debug, thiserror::Error)]
#[error("{}", NO_IMAGES_MESSAGE)]
pub struct NoImages;

/// Line printed on stderr before a non-zero exit, if any.
pub fn exit_message(err: &anyhow::Error) -> Option<String> {
    if err.downcast_ref::<NoImages>().is_some() {
        return None;
    }
    Some(format!("bulkimg error: {:#}", err))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchState {
    Running {
        done: usize,
        total: usize,
        fetched: usize,
        skipped: usize,
    },
    Done {
        path: PathBuf,
        entries: usize,
        skipped: usize,
    },
    Failed,
}

impl BatchState {
    pub fn started(total: usize) -> Self {
        BatchState::Running {
            done: 0,
            total,
            fetched: 0,
            skipped: 0,
        }
    }

    pub fn from_progress(p: Progress) -> Self {
        BatchState::Running {
            done: p.row,
            total: p.total,
            fetched: p.fetched,
            skipped: p.skipped,
        }
    }

    pub fn render(&self) -> String {
        match self {
            BatchState::Running {
                done,
                total,
                fetched,
                skipped,
            } => format!(
                "Downloading {} images... row {}/{} ({} fetched, {} skipped)",
                total, done, total, fetched, skipped
            ),
            BatchState::Done {
                path,
                entries,
                skipped,
            } => format!(
                "ZIP file ready: {} ({} images, {} skipped)",
                path.display(),
                entries,
                skipped
            ),
            BatchState::Failed => NO_IMAGES_MESSAGE.to_string(),
        }
    }

    /// Redraws the status line on stderr. Running states overwrite each other in place.
    pub fn draw(&self) {
        match self {
            BatchState::Running { .. } => eprint!("\r  {}  ", self.render()),
            _ => eprintln!("\r  {}", self.render()),
        }
    }
}
