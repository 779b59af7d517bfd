//! State shared by every file of a run.
//!
//! A `t` or `b` step changes the value for the rest of the run, not just for
//! the file it ran on: a later `-i` group flattening RGBA images still uses the
//! background set by an earlier `-b000000` group.

use crate::config::{BACKGROUND_DEFAULT, THRESHOLD_DEFAULT};
use crate::directive::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineState {
    /// Last level set by a threshold step.
    pub threshold_level: u8,
    /// Last colour set by a background step.
    pub background_color: Rgb,
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState {
            threshold_level: THRESHOLD_DEFAULT,
            background_color: Rgb(BACKGROUND_DEFAULT),
        }
    }
}
