//! Resource discovery with memoized caching
//!
//! This module provides:
//! - Ordered fallback pattern search for the web manifest and service worker
//! - A per-session [`DiscoveryCache`] memoizing the first successful resolution
//! - An observer contract notified at most once per resolution
//!
//! Lifecycle per resource kind: Unresolved -> (pattern match found |
//! explicit choice supplied) -> Resolved -> (external invalidation) ->
//! Unresolved. A resolved handle never silently reverts.

pub mod patterns;
pub mod search;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{ResourceHandle, ResourceKind};
use crate::error::{Result, file_not_found};

/// Event emitted when a resource kind is resolved
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub kind: ResourceKind,
    pub path: PathBuf,
}

type Observer = Box<dyn Fn(&ResolvedEvent) + Send>;

/// Session-lifetime cache of resolved handles.
///
/// One slot per resource kind, replaced whole on every update. The
/// "check cache, else search, else populate" sequence runs under one
/// lock so concurrent callers cannot populate a slot twice. Constructed
/// once per session and passed to [`Locator`]; tests construct
/// independent caches per case.
#[derive(Default)]
pub struct DiscoveryCache {
    slots: Mutex<HashMap<ResourceKind, ResourceHandle>>,
    observers: Mutex<Vec<Observer>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DiscoveryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for resolution events.
    ///
    /// Observers fire once per resolution, never once per memoized call.
    pub fn subscribe(&self, observer: impl Fn(&ResolvedEvent) + Send + 'static) {
        lock(&self.observers).push(Box::new(observer));
    }

    /// Drop the cached handle for a kind; the next locate re-scans
    pub fn invalidate(&self, kind: ResourceKind) {
        lock(&self.slots).remove(&kind);
    }

    /// Cached handle for a kind, if resolved
    #[allow(dead_code)]
    pub fn get(&self, kind: ResourceKind) -> Option<ResourceHandle> {
        lock(&self.slots).get(&kind).cloned()
    }

    fn notify(&self, event: &ResolvedEvent) {
        for observer in lock(&self.observers).iter() {
            observer(event);
        }
    }
}

/// Finds project resources using ordered fallback patterns
pub struct Locator<'a> {
    root: &'a Path,
    cache: &'a DiscoveryCache,
}

impl<'a> Locator<'a> {
    pub fn new(root: &'a Path, cache: &'a DiscoveryCache) -> Self {
        Self { root, cache }
    }

    /// Resolve a resource, reusing the cached handle when present.
    ///
    /// Absence is a normal outcome, not an error: callers handle
    /// "no manifest yet" as first-class.
    pub fn locate(&self, kind: ResourceKind) -> Result<Option<ResourceHandle>> {
        let mut slots = lock(&self.cache.slots);
        if let Some(handle) = slots.get(&kind) {
            return Ok(Some(handle.clone()));
        }

        let Some(path) = search::find_first(self.root, patterns::for_kind(kind)) else {
            return Ok(None);
        };

        let handle = ResourceHandle::snapshot(kind, &path)?;
        slots.insert(kind, handle.clone());
        drop(slots);

        self.cache.notify(&ResolvedEvent { kind, path });
        Ok(Some(handle))
    }

    /// Install an explicitly chosen path into the cache, bypassing
    /// pattern search. The choice takes precedence over any future
    /// automatic discovery for the cache's lifetime.
    pub fn install(&self, kind: ResourceKind, path: &Path) -> Result<ResourceHandle> {
        if !path.is_file() {
            return Err(file_not_found(path.display().to_string()));
        }

        let handle = ResourceHandle::snapshot(kind, path)?;
        lock(&self.cache.slots).insert(kind, handle.clone());

        self.cache.notify(&ResolvedEvent {
            kind,
            path: path.to_path_buf(),
        });
        Ok(handle)
    }

    /// Invalidate and immediately re-resolve. Used after the save flow
    /// writes a new file so the cache picks it up.
    pub fn refresh(&self, kind: ResourceKind) -> Result<Option<ResourceHandle>> {
        self.cache.invalidate(kind);
        self.locate(kind)
    }
}
