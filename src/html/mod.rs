//! Index document helpers
//!
//! Computes the manifest link markup and splices it into an index
//! document's head. Finding the document and deciding to edit it is the
//! caller's responsibility.

/// Markup linking the manifest from an index document
pub fn manifest_link_tag(manifest_rel_path: &str) -> String {
    format!(r#"<link rel="manifest" href="{manifest_rel_path}">"#)
}

/// Whether the index document already links a manifest
pub fn has_manifest_link(index_text: &str) -> bool {
    index_text.contains(r#"rel="manifest""#)
}

/// Splice the link tag immediately before the head close tag.
///
/// Returns `None` when the document has no `</head>`.
pub fn insert_manifest_link(index_text: &str, link_tag: &str) -> Option<String> {
    let at = index_text.find("</head>")?;
    let mut edited = String::with_capacity(index_text.len() + link_tag.len() + 1);
    edited.push_str(&index_text[..at]);
    edited.push_str(link_tag);
    edited.push('\n');
    edited.push_str(&index_text[at..]);
    Some(edited)
}
