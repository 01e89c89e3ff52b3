//! Icon materialization
//!
//! This module handles:
//! - Decoding inline data-URI icon payloads
//! - Persisting each payload as a file under a chosen directory
//! - Rewriting the icon list with project-relative paths
//!
//! The whole call either returns the full rewritten list or fails; a
//! caller never observes a shorter, misleading list with assets silently
//! dropped.

use std::path::Path;

use base64::Engine;
use serde::Serialize;

use crate::domain::IconAsset;
use crate::error::{Result, icon_decode_failed, icon_destination_failed, icon_write_failed};
use crate::path_utils;

/// Result of a materialization pass: destination plus rewritten assets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializedIcons {
    /// Chosen destination directory; empty when no destination was chosen
    pub path: String,
    /// Rewritten assets in input order; empty when no destination was chosen
    pub icons: Vec<IconAsset>,
}

/// Decode every inline payload and write it under `destination`.
///
/// `None` means the caller declined to pick a directory and yields the
/// "nothing happened" sentinel, distinguishable from an error. Output
/// order equals input order. Two icons deriving the same file name
/// overwrite one another in input order.
pub fn materialize(
    icons: &[IconAsset],
    destination: Option<&Path>,
    project_root: &Path,
) -> Result<MaterializedIcons> {
    let Some(destination) = destination else {
        return Ok(MaterializedIcons::default());
    };

    std::fs::create_dir_all(destination)
        .map_err(|e| icon_destination_failed(destination.display().to_string(), e.to_string()))?;

    let mut rewritten = Vec::with_capacity(icons.len());
    for icon in icons {
        rewritten.push(materialize_one(icon, destination, project_root)?);
    }

    Ok(MaterializedIcons {
        path: path_utils::to_forward_slashes(destination),
        icons: rewritten,
    })
}

fn materialize_one(
    icon: &IconAsset,
    destination: &Path,
    project_root: &Path,
) -> Result<IconAsset> {
    let data_uri = icon.data_uri()?;

    // An asset without a declared type falls back to the URI's MIME
    let file_name = if icon.mime_type.is_empty() {
        let typed = IconAsset {
            mime_type: data_uri.mime.to_string(),
            ..icon.clone()
        };
        typed.file_name()
    } else {
        icon.file_name()
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(data_uri.payload)
        .map_err(|e| icon_decode_failed(&file_name, e.to_string()))?;

    let target = destination.join(&file_name);
    std::fs::write(&target, &bytes)
        .map_err(|e| icon_write_failed(target.display().to_string(), e.to_string()))?;

    Ok(IconAsset {
        sizes: icon.sizes.clone(),
        mime_type: icon.mime_type.clone(),
        src: path_utils::relative_to_root(&target, project_root),
        purpose: icon.purpose.clone(),
    })
}
