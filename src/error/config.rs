//! Configuration errors

use super::UninstallError;

/// Creates a descriptor not found error
pub fn descriptor_not_found(path: impl Into<String>) -> UninstallError {
    UninstallError::DescriptorNotFound { path: path.into() }
}

/// Creates a descriptor parse failed error
pub fn descriptor_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> UninstallError {
    UninstallError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid descriptor error
pub fn descriptor_invalid(message: impl Into<String>) -> UninstallError {
    UninstallError::DescriptorInvalid {
        message: message.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> UninstallError {
    UninstallError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> UninstallError {
    UninstallError::ConfigInvalid {
        message: message.into(),
    }
}
