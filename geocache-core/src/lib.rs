//! GeoCache Core - Entity Types
//!
//! Pure data structures, errors, and identity-commitment helpers.
//! All other crates depend on this. This crate contains no store access
//! and no lifecycle logic.

pub mod config;
pub mod entities;
pub mod error;
pub mod identity;
pub mod random;

pub use config::RegistryConfig;
pub use entities::{Caller, Coord, CoordRange, GeoCache, Owner, Report, Trackable};
pub use error::{ConfigError, RegistryError, RegistryResult, StoreError};
pub use identity::{commit, derive_salt, verify};
pub use random::{OsRandom, RandomSource, SeededRandom, ALPHANUMERIC};
