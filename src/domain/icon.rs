//! Icon asset domain type
//!
//! An icon either carries its image inline as a `data:` URI (before
//! materialization) or points at a file relative to the project root
//! (after). Materialization is one-way: an asset is never re-encoded
//! back to inline form.

use serde::{Deserialize, Serialize};

use crate::error::{Result, invalid_icon_payload};
use crate::path_utils;

/// One entry of a manifest's `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    /// Size descriptor, e.g. "192x192", "48x48 96x96", or "any"
    #[serde(default)]
    pub sizes: String,

    /// MIME type, e.g. "image/png"
    #[serde(rename = "type", default)]
    pub mime_type: String,

    /// Data URI before materialization, project-relative path after
    pub src: String,

    /// Purpose tokens, e.g. "maskable any"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Borrowed view of a parsed `data:<mime>;base64,<payload>` URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime: &'a str,
    pub payload: &'a str,
}

impl IconAsset {
    /// Whether the source still holds an inline data URI
    pub fn is_inline(&self) -> bool {
        self.src.starts_with("data:")
    }

    /// Parse the source as a strict `data:<mime>;base64,<payload>` URI
    pub fn data_uri(&self) -> Result<DataUri<'_>> {
        let rest = self
            .src
            .strip_prefix("data:")
            .ok_or_else(|| invalid_icon_payload(&self.sizes, "missing data: scheme"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| invalid_icon_payload(&self.sizes, "missing ',' separator"))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| invalid_icon_payload(&self.sizes, "missing ;base64 marker"))?;
        Ok(DataUri { mime, payload })
    }

    /// Derive the on-disk file name from the size descriptor and MIME subtype.
    ///
    /// "192x192" + "image/png" -> "192x192-icon.png". Two icons with the same
    /// descriptor and subtype derive the same name and overwrite one another.
    pub fn file_name(&self) -> String {
        let subtype = self
            .mime_type
            .split_once('/')
            .map_or(self.mime_type.as_str(), |(_, subtype)| subtype);
        let subtype = if subtype.is_empty() { "png" } else { subtype };
        format!("{}-icon.{}", path_utils::safe_file_stem(&self.sizes), subtype)
    }

    /// Whether any declared size is at least `min` pixels on both axes.
    /// An "any" token qualifies unconditionally.
    pub fn meets(&self, min: u32) -> bool {
        parse_sizes(&self.sizes).iter().any(|size| match size {
            IconSize::Any => true,
            IconSize::Pixels(w, h) => *w >= min && *h >= min,
        })
    }

    /// Whether the purpose list contains the given token
    pub fn has_purpose(&self, token: &str) -> bool {
        self.purpose
            .as_deref()
            .is_some_and(|p| p.split_whitespace().any(|t| t.eq_ignore_ascii_case(token)))
    }
}

/// One parsed token of a sizes descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Any,
    Pixels(u32, u32),
}

/// Parse a sizes descriptor into tokens, skipping malformed entries
pub fn parse_sizes(descriptor: &str) -> Vec<IconSize> {
    descriptor
        .split_whitespace()
        .filter_map(|token| {
            if token.eq_ignore_ascii_case("any") {
                return Some(IconSize::Any);
            }
            let (w, h) = token
                .split_once(|c| c == 'x' || c == 'X')
                .map(|(w, h)| (w.parse().ok(), h.parse().ok()))?;
            Some(IconSize::Pixels(w?, h?))
        })
        .collect()
}
