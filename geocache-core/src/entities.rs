//! Core entity structures

use serde::{Deserialize, Serialize};

/// Coordinate on one axis.
pub type Coord = i64;

/// Ordered pair `[min, max]` bounding one axis.
///
/// Ordering is not enforced at write time; a reversed range simply admits
/// no visitors, since the strict-open interval is empty.
pub type CoordRange = [Coord; 2];

/// Per-invocation caller identity as supplied by the platform.
///
/// The raw `id` is trusted as authentic by this layer. It is persisted in
/// clear only in visitor logs and report notifiers, never as an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub id: String,
    pub name: String,
}

impl Caller {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Persisted owner identity: a one-way commitment plus the salt needed to
/// re-derive it. The raw owner id is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Hex-encoded stretched digest of `raw_id ∥ salt`.
    pub commitment: String,
    /// Per-record random salt, stored in clear.
    pub salt: String,
    pub name: String,
}

/// Exchangeable token embedded 1:1 inside a cache record.
/// Replaced wholesale on exchange, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trackable {
    pub id: String,
    pub value: String,
}

impl Trackable {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Moderation report appended to a cache record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub message: String,
    /// Reporter identity, stored raw (not commitment-derived).
    pub notifier: Caller,
}

/// The persisted cache record. The store key identifies it; no id field
/// lives inside the record itself.
///
/// Every mutation is a full read-modify-write: the whole record is
/// re-serialized and overwritten under the same key. Collection fields
/// default to empty so records written by older schema versions still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoCache {
    pub name: String,
    pub description: String,
    pub x_range: CoordRange,
    pub y_range: CoordRange,
    pub owner: Owner,
    pub trackable: Trackable,
    /// Append-only visitor log; duplicates permitted.
    #[serde(default)]
    pub visitors: Vec<Caller>,
    /// Append-only report log.
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl GeoCache {
    /// Strict-exclusive geofence test: a coordinate exactly on either
    /// boundary is rejected.
    pub fn admits(&self, x: Coord, y: Coord) -> bool {
        let x_in = self.x_range[0] < x && x < self.x_range[1];
        let y_in = self.y_range[0] < y && y < self.y_range[1];
        x_in && y_in
    }
}

// ============================================================================
// TESTS
// ============================================================================
