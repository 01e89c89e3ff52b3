//! Cross-platform path utilities for pwakit
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::Path;

use normpath::PathExt;

/// Characters that are unsafe in filesystem paths
/// Replaced with hyphens and collapsed: `/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a file stem safe for filesystem use.
///
/// Replaces unsafe characters and whitespace with hyphens, collapses
/// consecutive hyphens, and trims leading/trailing hyphens.
/// Returns "unknown" if the result is empty.
pub fn safe_file_stem(stem: &str) -> String {
    let key: String = stem
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .collect();

    let key = key
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if key.is_empty() {
        "unknown".to_string()
    } else {
        key
    }
}

/// Express `path` relative to `root`, with forward slashes.
///
/// Both sides are canonicalized first so symlinked temp dirs and `..`
/// segments compare equal. A path outside the root stays absolute.
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    let path = canonicalize_lossy(path);
    let root = canonicalize_lossy(root);

    match path.strip_prefix(&root) {
        Ok(rel) => to_forward_slashes(rel),
        Err(_) => to_forward_slashes(&path),
    }
}

fn canonicalize_lossy(path: &Path) -> std::path::PathBuf {
    dunce::canonicalize(path)
        .or_else(|_| path.normalize().map(|np| np.into_path_buf()))
        .unwrap_or_else(|_| path.to_path_buf())
}
