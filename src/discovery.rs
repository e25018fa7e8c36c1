// src/discovery.rs
use crate::error::{GradecovError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding the grade history and config, anywhere under the root.
pub const DATA_DIR_NAME: &str = ".gradecov";

/// Finds the first `.gradecov` directory under `root`.
///
/// The walk does not follow symlinks. Matching stops at the first hit so a
/// nested checkout cannot shadow the one closest to the root.
///
/// # Errors
/// Returns an error if the walk fails or no data directory exists.
pub fn find_data_dir(root: &Path) -> Result<PathBuf> {
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.file_name() == DATA_DIR_NAME {
            return Ok(entry.into_path());
        }
    }
    Err(GradecovError::DataDirNotFound(root.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_nested_data_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("sub/project/.gradecov");
        fs::create_dir_all(&target).unwrap();

        let found = find_data_dir(dir.path()).unwrap();
        assert_eq!(found, target);
    }

    #[test]
    fn errors_when_absent() {
        let dir = TempDir::new().unwrap();
        let err = find_data_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GradecovError::DataDirNotFound(_)));
    }
}
