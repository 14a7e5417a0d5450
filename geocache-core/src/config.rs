//! Configuration types

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tuning knobs for commitment derivation and identifier generation.
///
/// The defaults match the registry's wire-level contract (8-character
/// alphanumeric salts and identifiers, 100 hash rounds); tests may shrink
/// them, but records written under different `commitment_rounds` values do
/// not verify against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Length of per-record owner salts.
    pub salt_length: usize,
    /// Total hash applications in the identity commitment.
    pub commitment_rounds: u32,
    /// Length of generated trackable identifiers.
    pub token_id_length: usize,
    /// Length of generated report identifiers.
    pub report_id_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            salt_length: 8,
            commitment_rounds: 100,
            token_id_length: 8,
            report_id_length: 8,
        }
    }
}

impl RegistryConfig {
    /// Reject configurations that would weaken the commitment to nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.salt_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "salt_length".to_string(),
                reason: "must be nonzero".to_string(),
            });
        }
        if self.commitment_rounds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "commitment_rounds".to_string(),
                reason: "must be nonzero".to_string(),
            });
        }
        if self.token_id_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "token_id_length".to_string(),
                reason: "must be nonzero".to_string(),
            });
        }
        if self.report_id_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report_id_length".to_string(),
                reason: "must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
