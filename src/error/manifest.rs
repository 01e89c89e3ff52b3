//! Web manifest errors

use super::PwakitError;

/// Creates a malformed manifest error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::ManifestMalformed {
        path: path.into(),
        reason: reason.into(),
    }
}
