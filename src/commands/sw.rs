//! Service worker command implementation
//!
//! Checks the discovered (or explicitly chosen) worker: does it exist,
//! does it mention caching, and does the index document register it.
//! Prints the registration snippet when it does not.

use console::Style;
use std::path::PathBuf;

use crate::cli::SwArgs;
use crate::common;
use crate::domain::ResourceKind;
use crate::error::{Result, io_error};
use crate::locator::{DiscoveryCache, Locator, patterns, search};
use crate::path_utils;
use crate::worker;

/// Run sw command
pub fn run(project: Option<PathBuf>, args: SwArgs) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    let locator = Locator::new(&root, &cache);

    let handle = match &args.worker {
        Some(path) => Some(locator.install(ResourceKind::ServiceWorker, path)?),
        None => locator.locate(ResourceKind::ServiceWorker)?,
    };

    let Some(handle) = handle else {
        println!("No service worker found in this project.");
        println!("Once you have one, register it from your index document:");
        println!("  {}", worker::REGISTRATION_SNIPPET);
        return Ok(());
    };

    let caching = worker::handles_caching(&handle.text);
    let index = search::find_by_pattern(&root, patterns::INDEX_DOCUMENT)
        .into_iter()
        .next();
    let registered = match &index {
        Some(path) => worker::registered_in(&common::fs::read_to_string(path)?),
        None => false,
    };

    let rel = path_utils::relative_to_root(&handle.path, &root);

    if args.json {
        let payload = serde_json::json!({
            "path": rel,
            "handles_caching": caching,
            "registered": registered,
        });
        let text =
            serde_json::to_string_pretty(&payload).map_err(|e| io_error(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    println!("{} {}", Style::new().bold().apply_to("Service Worker"), rel);
    println!();
    print_check("Handles caching", caching);
    print_check("Registered in index document", registered);

    if !registered {
        println!();
        if index.is_none() {
            println!("No index.html found to check registration in.");
        }
        println!("Register the worker from your index document:");
        println!("  {}", worker::REGISTRATION_SNIPPET);
    }

    Ok(())
}

fn print_check(label: &str, passed: bool) {
    let mark = if passed {
        Style::new().green().apply_to("✓")
    } else {
        Style::new().yellow().apply_to("✗")
    };
    println!("  {mark} {label}");
}
