//! GeoCache Registry - Record Lifecycle Manager
//!
//! The contract surface over the external state store: existence checks,
//! creation, reads, owner-gated updates and deletion, geofenced visitor
//! registration, trackable exchange, and the append-only report log.
//!
//! The registry holds no per-record state between calls; the store, the
//! caller, and the randomness source are explicit per-call parameters.
//! Every mutation is a read-modify-write of the full record under a single
//! key, serialized as JSON.

pub mod service;

pub use service::GeoCacheService;

use geocache_core::{
    commit, derive_salt, verify, Caller, ConfigError, Coord, CoordRange, GeoCache, Owner,
    RandomSource, RegistryConfig, RegistryError, RegistryResult, Report, StoreError, Trackable,
};
use geocache_storage::StateStore;

// ============================================================================
// REGISTRY
// ============================================================================

/// Stateless lifecycle manager for cache records.
///
/// Per-key state machine: `ABSENT → EXISTS → ABSENT`. All operations except
/// [`create`](Self::create) and [`exists`](Self::exists) require `EXISTS`.
#[derive(Debug, Clone)]
pub struct GeoCacheRegistry {
    config: RegistryConfig,
}

impl Default for GeoCacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoCacheRegistry {
    /// Registry with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
        }
    }

    /// Registry with a validated custom configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // === Existence & creation ===

    /// Whether a record lives under `key`. Read failures propagate.
    pub fn exists(&self, store: &dyn StateStore, key: &str) -> RegistryResult<bool> {
        let data = store.get(key)?;
        Ok(data.is_some())
    }

    /// Create a new cache record under `key`.
    ///
    /// Fails with `AlreadyExists` against a live key. The owner is stored
    /// as a salted commitment of `caller.id`; the raw id is never
    /// persisted. The embedded trackable gets a fresh random id and the
    /// supplied value; visitor and report logs start empty.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        store: &dyn StateStore,
        rng: &mut dyn RandomSource,
        caller: &Caller,
        key: &str,
        name: &str,
        description: &str,
        x_range: CoordRange,
        y_range: CoordRange,
        trackable_value: &str,
    ) -> RegistryResult<()> {
        if self.exists(store, key)? {
            return Err(RegistryError::AlreadyExists {
                key: key.to_string(),
            });
        }

        let salt = derive_salt(rng, self.config.salt_length);
        let owner = Owner {
            commitment: commit(&caller.id, &salt, self.config.commitment_rounds),
            salt,
            name: caller.name.clone(),
        };

        let record = GeoCache {
            name: name.to_string(),
            description: description.to_string(),
            x_range,
            y_range,
            owner,
            trackable: Trackable {
                id: rng.alphanumeric(self.config.token_id_length),
                value: trackable_value.to_string(),
            },
            visitors: Vec::new(),
            reports: Vec::new(),
        };

        self.write(store, key, &record)
    }

    // === Reads ===

    /// Read the record under `key`. Public; no authorization check.
    pub fn read(&self, store: &dyn StateStore, key: &str) -> RegistryResult<GeoCache> {
        self.load(store, key)
    }

    /// Retrieve the report log in submission order. Owner-gated.
    pub fn get_reports(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
    ) -> RegistryResult<Vec<Report>> {
        let record = self.load(store, key)?;
        self.require_owner(&record, caller, key)?;
        Ok(record.reports)
    }

    // === Owner-gated mutations ===

    /// Overwrite the display name and description, preserving every other
    /// field of the stored record.
    pub fn update_descriptive(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
        new_name: &str,
        new_description: &str,
    ) -> RegistryResult<()> {
        let mut record = self.load(store, key)?;
        self.require_owner(&record, caller, key)?;

        record.name = new_name.to_string();
        record.description = new_description.to_string();

        self.write(store, key, &record)
    }

    /// Overwrite the two coordinate ranges, preserving everything else.
    pub fn update_coordinates(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
        new_x_range: CoordRange,
        new_y_range: CoordRange,
    ) -> RegistryResult<()> {
        let mut record = self.load(store, key)?;
        self.require_owner(&record, caller, key)?;

        record.x_range = new_x_range;
        record.y_range = new_y_range;

        self.write(store, key, &record)
    }

    /// Remove the record under `key`. Owner-gated.
    pub fn delete(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
    ) -> RegistryResult<()> {
        let record = self.load(store, key)?;
        self.require_owner(&record, caller, key)?;

        store.delete(key)?;
        Ok(())
    }

    // === Open operations ===

    /// Register a visit at `(x, y)`.
    ///
    /// The geofence is strict on both ends of both axes; a coordinate
    /// exactly on a boundary is rejected with `OutOfRange`. Any caller may
    /// register; duplicates are permitted.
    pub fn add_visitor(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
        x: Coord,
        y: Coord,
    ) -> RegistryResult<()> {
        let mut record = self.load(store, key)?;

        if !record.admits(x, y) {
            return Err(RegistryError::OutOfRange {
                key: key.to_string(),
                x,
                y,
            });
        }

        record.visitors.push(caller.clone());
        self.write(store, key, &record)
    }

    /// Swap the record's embedded trackable for `new_trackable`, returning
    /// the one previously held. Open to any caller.
    pub fn switch_trackable(
        &self,
        store: &dyn StateStore,
        new_trackable: Trackable,
        key: &str,
    ) -> RegistryResult<Trackable> {
        let mut record = self.load(store, key)?;

        let previous = std::mem::replace(&mut record.trackable, new_trackable);
        self.write(store, key, &record)?;

        Ok(previous)
    }

    /// Append a moderation report. Open to any caller; the reporter
    /// identity is stored raw alongside a fresh random report id.
    pub fn report(
        &self,
        store: &dyn StateStore,
        rng: &mut dyn RandomSource,
        caller: &Caller,
        message: &str,
        key: &str,
    ) -> RegistryResult<()> {
        let mut record = self.load(store, key)?;

        record.reports.push(Report {
            id: rng.alphanumeric(self.config.report_id_length),
            message: message.to_string(),
            notifier: caller.clone(),
        });

        self.write(store, key, &record)
    }

    // === Internal helpers ===

    /// Load and parse the record under `key`, or fail with `NotFound` /
    /// `Deserialization`.
    fn load(&self, store: &dyn StateStore, key: &str) -> RegistryResult<GeoCache> {
        let bytes = store.get(key)?.ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|_| RegistryError::Deserialization {
            key: key.to_string(),
        })
    }

    /// Serialize and overwrite the full record under `key`.
    fn write(&self, store: &dyn StateStore, key: &str, record: &GeoCache) -> RegistryResult<()> {
        let bytes = serde_json::to_vec(record).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: format!("record could not be serialized: {e}"),
        })?;

        store.put(key, bytes)?;
        Ok(())
    }

    /// Ownership gate: recompute the commitment from the caller's raw id
    /// and the stored salt, and compare to the stored commitment.
    fn require_owner(
        &self,
        record: &GeoCache,
        caller: &Caller,
        key: &str,
    ) -> RegistryResult<()> {
        if !verify(
            &caller.id,
            &record.owner.salt,
            &record.owner.commitment,
            self.config.commitment_rounds,
        ) {
            return Err(RegistryError::NotOwner {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
