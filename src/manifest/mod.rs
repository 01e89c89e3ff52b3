//! Manifest document store
//!
//! Read-parse-mutate-serialize-write over the manifest file. The document
//! is rewritten whole and always pretty-printed with 2-space indentation
//! plus a trailing newline, to stay diff-friendly for humans.

use std::path::PathBuf;

use serde_json::Value;

use crate::domain::{IconAsset, ResourceHandle};
use crate::error::{Result, file_write_failed, manifest_malformed};

/// A parsed manifest tied to its on-disk location
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    pub path: PathBuf,
    pub value: Value,
}

impl ManifestDocument {
    /// Parse a resolved handle's text snapshot
    pub fn parse(handle: &ResourceHandle) -> Result<Self> {
        let origin = handle.path.display().to_string();
        let value: Value = serde_json::from_str(&handle.text)
            .map_err(|e| manifest_malformed(&origin, e.to_string()))?;

        if !value.is_object() {
            return Err(manifest_malformed(origin, "top level is not a JSON object"));
        }

        Ok(Self {
            path: handle.path.clone(),
            value,
        })
    }

    /// Replace the `icons` member wholesale with the given assets
    pub fn set_icons(&mut self, icons: &[IconAsset]) -> Result<()> {
        let icons = serde_json::to_value(icons)
            .map_err(|e| manifest_malformed(self.path.display().to_string(), e.to_string()))?;

        if let Some(object) = self.value.as_object_mut() {
            object.insert("icons".to_string(), icons);
        }
        Ok(())
    }

    /// Serialize back to disk, pretty-printed with 2-space indentation
    pub fn write(&self) -> Result<()> {
        let text = to_pretty_text(&self.value);
        std::fs::write(&self.path, text)
            .map_err(|e| file_write_failed(self.path.display().to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Pretty-print a manifest value the way the store writes it
pub fn to_pretty_text(value: &Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    text.push('\n');
    text
}
