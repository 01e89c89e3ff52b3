//! Shared command helpers

use std::path::{Path, PathBuf};

use crate::error::{Result, file_not_found, io_error};

/// Resolve the project root for a command.
///
/// Prefers the enclosing git repository's workdir when one exists, so
/// running from a subdirectory still scans the whole project. Outside a
/// repository the given (or current) directory is the root.
pub fn project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let start = match project {
        Some(path) => {
            if !path.is_dir() {
                return Err(file_not_found(path.display().to_string()));
            }
            path
        }
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };

    match git2::Repository::discover(&start) {
        Ok(repo) => Ok(repo.workdir().map_or(start, Path::to_path_buf)),
        Err(_) => Ok(start),
    }
}
