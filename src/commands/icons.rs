//! Icons command implementation
//!
//! Reads a payload file of inline icon assets (collected by an external
//! UI step), materializes them into the destination directory, and wires
//! the rewritten icon array back into the discovered manifest. The
//! manifest is only rewritten after every icon file landed on disk.

use std::path::{Path, PathBuf};

use console::Style;
use indicatif::ProgressBar;

use crate::cli::IconsArgs;
use crate::common;
use crate::domain::{IconAsset, ResourceKind};
use crate::error::{Result, invalid_icon_payload, payload_parse_failed};
use crate::icons as materializer;
use crate::locator::{DiscoveryCache, Locator};
use crate::manifest::ManifestDocument;
use crate::path_utils;

/// Run icons command
pub fn run(project: Option<PathBuf>, args: IconsArgs) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    let locator = Locator::new(&root, &cache);

    let payload_text = common::fs::read_to_string(&args.payload)?;
    let assets = parse_payload(&payload_text, &args.payload)?;

    if assets.is_empty() {
        println!("Payload holds no icons; nothing to do.");
        return Ok(());
    }

    // Fail before any file lands on disk, not halfway through
    if let Some(asset) = assets.iter().find(|a| !a.is_inline()) {
        return Err(invalid_icon_payload(
            &asset.sizes,
            "payload icons must carry inline data URIs",
        ));
    }

    let dest = args.dest.unwrap_or_else(|| root.join("icons"));

    if !args.yes && !confirm_overwrite(&dest, &assets)? {
        println!("Aborted.");
        return Ok(());
    }

    let progress = ProgressBar::new_spinner();
    progress.set_message(format!("Writing {} icon(s)...", assets.len()));
    let materialized = materializer::materialize(&assets, Some(&dest), &root)?;
    progress.finish_and_clear();

    println!("Icons saved to {}", materialized.path);

    if !materialized.icons.iter().any(|icon| icon.meets(512)) {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Tip: include a 512x512 icon for splash screens.")
        );
    }
    if !materialized
        .icons
        .iter()
        .any(|icon| icon.has_purpose("maskable"))
    {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Tip: mark one icon as maskable for adaptive launchers.")
        );
    }

    if args.no_relink {
        return Ok(());
    }

    match locator.locate(ResourceKind::Manifest)? {
        Some(handle) => {
            let mut doc = ManifestDocument::parse(&handle)?;
            doc.set_icons(&materialized.icons)?;
            doc.write()?;
            locator.refresh(ResourceKind::Manifest)?;
            println!(
                "Updated {}",
                path_utils::relative_to_root(&doc.path, &root)
            );
        }
        None => {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to("No web manifest found; icons were written but not linked.")
            );
        }
    }

    Ok(())
}

/// Ask before clobbering icon files that already exist in the destination
fn confirm_overwrite(dest: &Path, assets: &[IconAsset]) -> Result<bool> {
    let colliding = assets
        .iter()
        .map(IconAsset::file_name)
        .filter(|name| dest.join(name).exists())
        .count();

    if colliding == 0 {
        return Ok(true);
    }

    let answer = inquire::Confirm::new(&format!(
        "{colliding} existing icon file(s) in {} will be overwritten. Continue?",
        dest.display()
    ))
    .with_default(false)
    .prompt()?;
    Ok(answer)
}

/// Parse the payload file: a bare array of assets, or an object with an
/// "icons" array.
fn parse_payload(text: &str, path: &Path) -> Result<Vec<IconAsset>> {
    let origin = path.display().to_string();
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| payload_parse_failed(&origin, e.to_string()))?;

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(mut object) => match object.remove("icons") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => {
                return Err(payload_parse_failed(origin, "expected an \"icons\" array"));
            }
        },
        _ => {
            return Err(payload_parse_failed(
                origin,
                "expected an array of icon assets",
            ));
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry).map_err(|e| payload_parse_failed(&origin, e.to_string()))
        })
        .collect()
}
