//! Runs one operation list against one file.
//!
//! # Steps
//!
//! 1. Open the file and remember its container format.
//! 2. Skip it unless it is 8-bit RGB or RGBA.
//! 3. Apply the operations in order, threading [`PipelineState`] through.
//!    A `q` stops the list and the file is left as it was on disk; `qq` does
//!    the same and tells the caller to stop the whole run.
//! 4. Otherwise move the original to `<name>.bak` and save the result in the
//!    original format.

use std::io;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

use crate::directive::{Operation, QuitScope};
use crate::file::{open_image, replace_with_backup};
use crate::pipeline::ops::{self, InvertPolicy};
use crate::pipeline::state::PipelineState;
use crate::pipeline::view::Previewer;
use crate::displaylevel;

/// Failures while reading or writing one file.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{}: unrecognised image format", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("{}: cannot decode image: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A resize step asked for more memory than a resize may use.
    #[error("{}: cannot resize: {source}", .path.display())]
    TooLarge {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{}: cannot encode image: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{}: cannot rename to {}: {source}", .path.display(), .backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        source: io::Error,
    },

    #[error("{}: cannot write image (original kept as {}): {source}", .path.display(), .backup.display())]
    Save {
        path: PathBuf,
        backup: PathBuf,
        source: io::Error,
    },
}

impl ExecError {
    /// `true` once the file on disk may have been touched: the run stops.
    /// Read-side failures only skip the file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExecError::Backup { .. } | ExecError::Save { .. })
    }
}

/// Why a file was left alone without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Colour mode other than 8-bit RGB / RGBA; carries the mode name.
    UnsupportedMode(String),
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Transformed and written back; the original is at `backup`.
    Saved { backup: PathBuf },
    Skipped(SkipReason),
    /// A `q` ended the list; nothing was written.
    QuitFile,
    /// A `qq` ended the list; nothing was written and the run must stop.
    QuitAll,
}

/// Result of running an operation list over an in-memory image.
#[derive(Debug)]
pub struct Applied {
    pub image: DynamicImage,
    /// Set when a quit step ended the list early.
    pub stopped_by: Option<QuitScope>,
}

/// Apply `ops` to `image` in order.
///
/// `label` names the image in diagnostics and previews. Fails only when a
/// resize step would exceed the resize memory budget.
pub fn apply_operations(
    mut image: DynamicImage,
    ops: &[Operation],
    state: &mut PipelineState,
    previewer: &mut dyn Previewer,
    policy: InvertPolicy,
    label: &str,
) -> image::ImageResult<Applied> {
    for op in ops {
        match *op {
            Operation::Invert => {
                image = ops::invert(image, policy, state.background_color);
            }
            Operation::Threshold(level) => {
                state.threshold_level = level;
                image = ops::threshold(image, state.threshold_level);
            }
            Operation::Resize(ratio) => {
                image = ops::resize(image, ratio)?;
                displaylevel!(4, "{}: resized to {}x{} \n", label, image.width(), image.height());
            }
            Operation::SetBackground(color) => {
                state.background_color = color;
                displaylevel!(4, "background set to {} \n", color);
            }
            Operation::View => {
                if let Err(e) = previewer.preview(label, &image) {
                    displaylevel!(1, "{}: preview failed: {:#} \n", label, e);
                }
            }
            Operation::Help => {}
            Operation::Quit(scope) => {
                return Ok(Applied {
                    image,
                    stopped_by: Some(scope),
                });
            }
        }
    }
    Ok(Applied {
        image,
        stopped_by: None,
    })
}

/// Open `path`, run `ops` on it and write the result back.
pub fn execute(
    path: &Path,
    ops: &[Operation],
    state: &mut PipelineState,
    previewer: &mut dyn Previewer,
    policy: InvertPolicy,
) -> Result<Outcome, ExecError> {
    let opened = open_image(path)?;
    if !ops::is_supported(&opened.image) {
        return Ok(Outcome::Skipped(SkipReason::UnsupportedMode(format!(
            "{:?}",
            opened.image.color()
        ))));
    }

    let label = path.display().to_string();
    let applied = apply_operations(opened.image, ops, state, previewer, policy, &label)
        .map_err(|source| ExecError::TooLarge {
            path: path.to_path_buf(),
            source,
        })?;
    match applied.stopped_by {
        Some(QuitScope::File) => Ok(Outcome::QuitFile),
        Some(QuitScope::All) => Ok(Outcome::QuitAll),
        None => {
            let backup = replace_with_backup(path, &applied.image, opened.format)?;
            Ok(Outcome::Saved { backup })
        }
    }
}
