//! Error types and handling for pwakit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Web manifest errors
//! - [`icons`]: Icon materialization errors
//! - [`payload`]: Icon payload file errors
//! - [`html`]: Index document errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod fs;
pub mod html;
pub mod icons;
pub mod manifest;
pub mod payload;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use html::head_missing;
#[allow(unused_imports)]
pub use icons::{
    decode_failed as icon_decode_failed, destination_failed as icon_destination_failed,
    invalid_payload as invalid_icon_payload, write_failed as icon_write_failed,
};
#[allow(unused_imports)]
pub use manifest::malformed as manifest_malformed;
#[allow(unused_imports)]
pub use payload::parse_failed as payload_parse_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pwakit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PwakitError {
    // Manifest errors
    #[error("Web manifest is not valid JSON: {path}: {reason}")]
    #[diagnostic(
        code(pwakit::manifest::malformed),
        help("Fix the JSON syntax first. A missing manifest is reported separately, never as a parse failure.")
    )]
    ManifestMalformed { path: String, reason: String },

    // Icon payload file errors
    #[error("Failed to parse icon payload file: {path}: {reason}")]
    #[diagnostic(
        code(pwakit::payload::parse_failed),
        help("The payload must be a JSON array of {{\"sizes\", \"type\", \"src\"}} entries, or an object with an \"icons\" array")
    )]
    PayloadParseFailed { path: String, reason: String },

    // Icon materialization errors
    #[error("Icon '{sizes}' does not carry a well-formed data URI: {reason}")]
    #[diagnostic(
        code(pwakit::icons::invalid_payload),
        help("Icon sources must look like data:image/png;base64,<payload>")
    )]
    InvalidIconPayload { sizes: String, reason: String },

    #[error("Failed to decode icon '{name}': {reason}")]
    #[diagnostic(code(pwakit::icons::decode_failed))]
    IconDecodeFailed { name: String, reason: String },

    #[error("Failed to write icon file: {path}: {reason}")]
    #[diagnostic(code(pwakit::icons::write_failed))]
    IconWriteFailed { path: String, reason: String },

    #[error("Icon destination is unusable: {path}: {reason}")]
    #[diagnostic(
        code(pwakit::icons::destination_failed),
        help("Choose a directory that exists or can be created")
    )]
    IconDestinationFailed { path: String, reason: String },

    // Index document errors
    #[error("No </head> tag in index document: {path}")]
    #[diagnostic(
        code(pwakit::html::head_missing),
        help("Add a <head> section to the index document, then re-run with --write")
    )]
    HeadTagMissing { path: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(pwakit::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(pwakit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(pwakit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pwakit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PwakitError {
    fn from(err: std::io::Error) -> Self {
        PwakitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PwakitError {
    fn from(err: serde_json::Error) -> Self {
        PwakitError::ManifestMalformed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for PwakitError {
    fn from(err: inquire::InquireError) -> Self {
        PwakitError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PwakitError>;
