//! Error types for registry operations

use crate::entities::Coord;
use thiserror::Error;

/// Failures surfaced by the external key-addressed store.
///
/// Absence of a key is not an error; `StateStore::get` reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Could not read key {key} from the state store: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Could not write key {key} to the state store: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Could not delete key {key} from the state store: {reason}")]
    DeleteFailed { key: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Master error type for registry operations.
///
/// Every failure is terminal for the current invocation: nothing is
/// retried, and either the full record is rewritten or nothing is
/// persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("The cache {key} already exists")]
    AlreadyExists { key: String },

    #[error("The cache {key} does not exist")]
    NotFound { key: String },

    #[error("Stored bytes for cache {key} do not parse as a cache record")]
    Deserialization { key: String },

    #[error("Caller is not the owner of cache {key}")]
    NotOwner { key: String },

    #[error("Coordinates ({x}, {y}) are outside the location range of cache {key}")]
    OutOfRange { key: String, x: Coord, y: Coord },
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_includes_key_and_reason() {
        let err = StoreError::ReadFailed {
            key: "cache001".to_string(),
            reason: "connection reset".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("cache001"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn registry_error_display_not_owner() {
        let err = RegistryError::NotOwner {
            key: "cache001".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("not the owner"));
        assert!(msg.contains("cache001"));
    }

    #[test]
    fn registry_error_display_out_of_range() {
        let err = RegistryError::OutOfRange {
            key: "cache001".to_string(),
            x: 11,
            y: -3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("(11, -3)"));
        assert!(msg.contains("cache001"));
    }

    #[test]
    fn registry_error_from_store_error() {
        let err = RegistryError::from(StoreError::WriteFailed {
            key: "k".to_string(),
            reason: "disk full".to_string(),
        });
        assert!(matches!(err, RegistryError::Store(_)));
    }

    #[test]
    fn registry_error_from_config_error() {
        let err = RegistryError::from(ConfigError::InvalidValue {
            field: "salt_length".to_string(),
            reason: "must be nonzero".to_string(),
        });
        assert!(matches!(err, RegistryError::Config(_)));
    }
}
