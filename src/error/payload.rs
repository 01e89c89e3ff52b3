//! Icon payload file errors

use super::PwakitError;

/// Creates a payload parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::PayloadParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
