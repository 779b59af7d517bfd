//! Wildcard expansion of filename tokens.
//!
//! [`expand_pattern`] turns one command-line token into the list of regular
//! files it names, using the [`glob`] crate. Matches come back in the crate's
//! order (sorted by path). Directories and other non-files are dropped, and a
//! pattern that matches nothing yields an empty list, which is not an error.

use std::path::PathBuf;

use glob::{glob, PatternError};

use crate::displaylevel;

/// Expand `pattern` into the regular files it matches.
///
/// Returns `Err` only when the pattern itself is malformed (e.g. an unclosed
/// `[`). Entries that cannot be read while matching are reported and skipped.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
    let mut result = Vec::new();
    for entry in glob(pattern)? {
        match entry {
            Ok(path) if path.is_file() => result.push(path),
            Ok(path) => {
                displaylevel!(3, "{}: not a regular file -- ignored \n", path.display());
            }
            Err(e) => {
                displaylevel!(2, "{}: {} -- ignored \n", e.path().display(), e.error());
            }
        }
    }
    Ok(result)
}
