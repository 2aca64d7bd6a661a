//! Input file discovery.

use std::path::PathBuf;

use crate::error::Error;

/// Expands a glob pattern into an ordered list of matching file paths.
///
/// An empty match set is not an error; the caller simply has nothing to do.
/// Directories matching the pattern are skipped.
pub fn expand_input_glob(pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
