//! Common file system operations with unified error handling

use std::path::Path;

use crate::error::{Result, file_not_found, file_read_failed, file_write_failed};

/// Read a file to a string, mapping failures to pwakit errors
pub fn read_to_string(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(file_not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))
}

/// Ensure the parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_write_failed(parent.display().to_string(), e.to_string()))?;
    }
    Ok(())
}

/// Write a file, creating parent directories first
pub fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))
}
