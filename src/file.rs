//! Image files on disk: open with format detection, then replace in place
//! while keeping the original under `<name>.bak`.
//!
//! The replacement is two steps (rename, then write) and is not atomic. The
//! new image is encoded before the rename, so an encoder failure leaves the
//! original untouched; a failure of the final write leaves only the backup.

use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::config::BACKUP_SUFFIX;
use crate::displaylevel;
use crate::pipeline::ExecError;

/// A decoded image together with the container format it was read from.
#[derive(Debug, Clone)]
pub struct OpenedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Open and decode `path`, sniffing the format from its content first and
/// falling back to the extension.
pub fn open_image(path: &Path) -> Result<OpenedImage, ExecError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ExecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let format = reader.format().ok_or_else(|| ExecError::UnknownFormat {
        path: path.to_path_buf(),
    })?;
    let image = reader.decode().map_err(|source| ExecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    displaylevel!(
        4,
        "{}: {:?} {}x{} {:?} \n",
        path.display(),
        format,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(OpenedImage { image, format })
}

/// `<path>.bak` - the suffix is appended to the full file name.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Encode `image` as `format` into memory.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> image::ImageResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format)?;
    Ok(out.into_inner())
}

/// Move `path` to its backup name, then write `image` to `path` as `format`.
///
/// An existing backup is overwritten. Returns the backup path.
pub fn replace_with_backup(
    path: &Path,
    image: &DynamicImage,
    format: ImageFormat,
) -> Result<PathBuf, ExecError> {
    let bytes = encode(image, format).map_err(|source| ExecError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let backup = backup_path(path);
    fs::rename(path, &backup).map_err(|source| ExecError::Backup {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    displaylevel!(4, "{} -> {} \n", path.display(), backup.display());

    fs::write(path, &bytes).map_err(|source| ExecError::Save {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    Ok(backup)
}
