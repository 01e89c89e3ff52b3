//! Icon materialization errors

use super::PwakitError;

/// Creates an invalid icon payload error
pub fn invalid_payload(sizes: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::InvalidIconPayload {
        sizes: sizes.into(),
        reason: reason.into(),
    }
}

/// Creates an icon decode failed error
pub fn decode_failed(name: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::IconDecodeFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an icon write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::IconWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an icon destination failed error
pub fn destination_failed(path: impl Into<String>, reason: impl Into<String>) -> PwakitError {
    PwakitError::IconDestinationFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
