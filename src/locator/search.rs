//! Project-wide file search
//!
//! Walks the project tree in file-name-sorted order (deterministic),
//! skipping dependency directories, and matches file names against glob
//! patterns with `wax`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::patterns::IGNORED_DIRS;

fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

/// All files under `root` whose names match `pattern`, in walk order
pub fn find_by_pattern(root: &Path, pattern: &str) -> Vec<PathBuf> {
    let Ok(glob) = Glob::new(pattern) else {
        return Vec::new();
    };

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| glob.is_match(CandidatePath::from(name)))
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// First file resolved by the ordered pattern list.
///
/// A pattern earlier in the list always wins over a later one, regardless
/// of where in the tree the matches sit.
pub fn find_first(root: &Path, patterns: &[&str]) -> Option<PathBuf> {
    patterns
        .iter()
        .find_map(|pattern| find_by_pattern(root, pattern).into_iter().next())
}
