//! Registration store errors

use super::UninstallError;

/// Creates a registry read failed error
pub fn read_failed(key: impl Into<String>, reason: impl Into<String>) -> UninstallError {
    UninstallError::RegistryReadFailed {
        key: key.into(),
        reason: reason.into(),
    }
}

/// Creates a registry remove failed error
pub fn remove_failed(key: impl Into<String>, reason: impl Into<String>) -> UninstallError {
    UninstallError::RegistryRemoveFailed {
        key: key.into(),
        reason: reason.into(),
    }
}
