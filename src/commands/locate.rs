//! Locate command implementation
//!
//! Shows where discovery resolved the web manifest and service worker.
//! "Not found" is a legitimate state, never an error.

use console::Style;
use std::path::PathBuf;

use crate::cli::LocateArgs;
use crate::domain::{ResourceHandle, ResourceKind};
use crate::error::{Result, io_error};
use crate::locator::{DiscoveryCache, Locator};
use crate::path_utils;

/// Run locate command
pub fn run(project: Option<PathBuf>, args: LocateArgs) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    let locator = Locator::new(&root, &cache);

    let manifest = locator.locate(ResourceKind::Manifest)?;
    let worker = locator.locate(ResourceKind::ServiceWorker)?;

    let rel = |handle: &Option<ResourceHandle>| {
        handle
            .as_ref()
            .map(|h| path_utils::relative_to_root(&h.path, &root))
    };

    if args.json {
        let describe = |handle: &Option<ResourceHandle>| {
            handle.as_ref().map(|h| {
                serde_json::json!({
                    "path": path_utils::relative_to_root(&h.path, &root),
                    "fingerprint": h.fingerprint(),
                })
            })
        };
        let payload = serde_json::json!({
            "manifest": describe(&manifest),
            "service_worker": describe(&worker),
        });
        let text =
            serde_json::to_string_pretty(&payload).map_err(|e| io_error(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    print_resource("Web manifest", rel(&manifest));
    print_resource("Service worker", rel(&worker));
    Ok(())
}

fn print_resource(label: &str, path: Option<String>) {
    match path {
        Some(path) => println!(
            "{:<16} {}",
            Style::new().bold().apply_to(format!("{label}:")),
            path
        ),
        None => println!(
            "{:<16} {}",
            Style::new().bold().apply_to(format!("{label}:")),
            Style::new().dim().apply_to("not found")
        ),
    }
}
