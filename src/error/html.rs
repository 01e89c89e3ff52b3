//! Index document errors

use super::PwakitError;

/// Creates a missing head tag error
pub fn head_missing(path: impl Into<String>) -> PwakitError {
    PwakitError::HeadTagMissing { path: path.into() }
}
