//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to create common test
//! environments (temp directories, project trees) with a single call.

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Create a temp directory holding a minimal web project: an index
/// document plus a manifest satisfying every required rule.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_web_project() -> TempDir {
    let temp = create_temp_dir();
    create_test_files(
        &temp,
        &[
            (
                "index.html",
                "<html><head><title>Example</title></head><body></body></html>",
            ),
            (
                "public/manifest.json",
                r##"{
  "name": "Example App",
  "short_name": "Example",
  "start_url": "/",
  "display": "standalone",
  "background_color": "#ffffff",
  "theme_color": "#2f3d58",
  "icons": [
    {"sizes": "192x192", "type": "image/png", "src": "icons/192x192-icon.png"},
    {"sizes": "512x512", "type": "image/png", "src": "icons/512x512-icon.png"}
  ]
}
"##,
            ),
            (
                "service-worker.js",
                "self.addEventListener('install', () => caches.open('v1'));",
            ),
        ],
    );
    temp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[("a/b.json", "{}"), ("c.txt", "text")],
        );

        assert!(temp.path().join("a/b.json").exists());
        let content =
            std::fs::read_to_string(temp.path().join("c.txt")).expect("Failed to read");
        assert_eq!(content, "text");
    }

    #[test]
    fn test_create_web_project() {
        let temp = create_web_project();
        assert!(temp.path().join("index.html").exists());
        assert!(temp.path().join("public/manifest.json").exists());
        assert!(temp.path().join("service-worker.js").exists());
    }
}
