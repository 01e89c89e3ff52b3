//! Discovery pattern tables
//!
//! Ordered fallback patterns per resource kind. Within one discovery
//! attempt, a lower-index pattern always wins: discovery stops at the
//! first pattern yielding a match and later patterns are never consulted.

use crate::domain::ResourceKind;

/// Directories never descended into during project-wide search
pub const IGNORED_DIRS: &[&str] = &["node_modules", ".git"];

/// File name of the index document the manifest link is spliced into
pub const INDEX_DOCUMENT: &str = "index.html";

const MANIFEST_PATTERNS: &[&str] = &["manifest.json", "web-manifest.json", "*.webmanifest"];

const WORKER_PATTERNS: &[&str] = &["service-worker.js", "pwabuilder-sw.js", "sw.js"];

/// Ordered fallback patterns for a resource kind
pub fn for_kind(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Manifest => MANIFEST_PATTERNS,
        ResourceKind::ServiceWorker => WORKER_PATTERNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_patterns_prefer_exact_names() {
        let patterns = for_kind(ResourceKind::Manifest);
        assert_eq!(patterns[0], "manifest.json");
        assert!(patterns.last().is_some_and(|p| p.contains('*')));
    }

    #[test]
    fn test_worker_patterns_start_with_conventional_name() {
        assert_eq!(for_kind(ResourceKind::ServiceWorker)[0], "service-worker.js");
    }
}
