//! Discovered resource handles
//!
//! A handle is the cached result of resolving a project resource (web manifest
//! or service worker): its absolute path plus a full text snapshot taken at
//! resolution time. Handles are replaced whole, never mutated field by field,
//! so a reader can never observe a half-updated handle.

use std::path::{Path, PathBuf};

use crate::error::{Result, file_read_failed};

/// Kinds of project resources the locator can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Manifest,
    ServiceWorker,
}

impl ResourceKind {
    /// Human-readable label used in messages and reports
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Manifest => "web manifest",
            ResourceKind::ServiceWorker => "service worker",
        }
    }
}

/// A resolved resource: absolute path plus text snapshot
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub text: String,
    fingerprint: String,
}

impl ResourceHandle {
    /// Read the file at `path` and snapshot it into a handle
    pub fn snapshot(kind: ResourceKind, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
        let fingerprint = blake3::hash(text.as_bytes()).to_hex().to_string();
        Ok(Self {
            kind,
            path: path.to_path_buf(),
            text,
            fingerprint,
        })
    }

    /// Content fingerprint of the snapshot (blake3, hex)
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether the on-disk file has drifted from this snapshot.
    ///
    /// The cache never refreshes on its own; this lets a caller decide
    /// when an explicit invalidation is worth it. A file that can no
    /// longer be read counts as stale.
    #[allow(dead_code)]
    pub fn is_stale(&self) -> bool {
        match std::fs::read(&self.path) {
            Ok(bytes) => blake3::hash(&bytes).to_hex().to_string() != self.fingerprint,
            Err(_) => true,
        }
    }
}
