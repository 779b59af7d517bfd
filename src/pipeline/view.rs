//! The `v` step: show the image as it stands at that point of the pipeline.
//!
//! [`InteractivePreview`] writes the image to a temporary PNG and either runs
//! the configured viewer (blocking until it exits) or prints the path and
//! waits for Enter. [`HeadlessPreview`] does nothing and is used whenever no
//! one could be watching: stdin is not a terminal and no viewer is configured.

use std::io::IsTerminal;
use std::process::Command;

use anyhow::{bail, Context};
use image::{DynamicImage, ImageFormat};

use crate::cli::help::wait_enter;
use crate::displaylevel;

/// Something that can show an intermediate image to the user.
pub trait Previewer {
    /// Show `img`, labelled with the file it came from. Blocks until dismissed.
    fn preview(&mut self, label: &str, img: &DynamicImage) -> anyhow::Result<()>;
}

/// Discards preview requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPreview;

impl Previewer for HeadlessPreview {
    fn preview(&mut self, label: &str, _img: &DynamicImage) -> anyhow::Result<()> {
        displaylevel!(3, "{}: preview skipped (no terminal) \n", label);
        Ok(())
    }
}

/// Shows previews through an external viewer or a wait-for-Enter prompt.
#[derive(Debug, Default, Clone)]
pub struct InteractivePreview {
    /// Viewer command; the preview path is appended as its last argument.
    pub viewer: Option<String>,
}

impl InteractivePreview {
    pub fn new(viewer: Option<String>) -> Self {
        InteractivePreview { viewer }
    }
}

impl Previewer for InteractivePreview {
    fn preview(&mut self, label: &str, img: &DynamicImage) -> anyhow::Result<()> {
        let file = tempfile::Builder::new()
            .prefix("image_convert-")
            .suffix(".png")
            .tempfile()
            .context("cannot create preview file")?;
        img.save_with_format(file.path(), ImageFormat::Png)
            .with_context(|| format!("cannot write preview of {}", label))?;

        match &self.viewer {
            Some(viewer) => {
                let mut parts = viewer.split_whitespace();
                let program = match parts.next() {
                    Some(p) => p,
                    None => bail!("viewer command is empty"),
                };
                let status = Command::new(program)
                    .args(parts)
                    .arg(file.path())
                    .status()
                    .with_context(|| format!("cannot launch viewer '{}'", viewer))?;
                if !status.success() {
                    bail!("viewer '{}' exited with {}", viewer, status);
                }
            }
            None => {
                eprintln!("Preview of {} : {}", label, file.path().display());
                wait_enter();
            }
        }
        // `file` is removed here, after the viewer or the prompt has returned.
        Ok(())
    }
}

/// Pick the previewer for this run.
pub fn previewer_for(viewer: Option<String>) -> Box<dyn Previewer> {
    if viewer.is_some() || std::io::stdin().is_terminal() {
        Box::new(InteractivePreview::new(viewer))
    } else {
        Box::new(HeadlessPreview)
    }
}
