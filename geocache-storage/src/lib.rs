//! GeoCache Storage - State Store Trait and Mock Implementations
//!
//! Defines the key-addressed persistence abstraction the registry runs
//! against. The production implementation is supplied by the host
//! platform; this crate ships an in-memory mock and an error-injecting
//! wrapper for tests.

use geocache_core::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// STATE STORE TRAIT
// ============================================================================

/// Key-addressed byte store consumed by the registry.
///
/// `get`/`put`/`delete` are treated as atomic, single-key,
/// immediately-consistent primitives. An absent key is `Ok(None)`, distinct
/// from an error outcome. The host serializes conflicting writes to the
/// same key; this layer performs no locking, retries, or backoff.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key` and its value.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// MOCK STORE
// ============================================================================

/// In-memory store for tests.
#[derive(Debug, Default, Clone)]
pub struct MockStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of live keys.
    pub fn key_count(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Raw bytes under `key`, for asserting what was actually persisted.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Seed a key directly, bypassing the registry.
    pub fn seed(&self, key: &str, value: Vec<u8>) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }
}

impl StateStore for MockStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// FAILING STORE
// ============================================================================

/// Wrapper that injects failures around an inner [`MockStore`], for
/// exercising the store error paths.
#[derive(Debug, Default, Clone)]
pub struct FailingStore {
    inner: MockStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_deletes: bool,
}

impl FailingStore {
    /// Store that fails every read.
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    /// Store that reads normally but fails every write.
    pub fn writes(inner: MockStore) -> Self {
        Self {
            inner,
            fail_writes: true,
            ..Default::default()
        }
    }

    /// Store that reads normally but fails every delete.
    pub fn deletes(inner: MockStore) -> Self {
        Self {
            inner,
            fail_deletes: true,
            ..Default::default()
        }
    }

    /// The wrapped store, for inspecting surviving state.
    pub fn inner(&self) -> &MockStore {
        &self.inner
    }
}

impl StateStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::ReadFailed {
                key: key.to_string(),
                reason: "injected read failure".to_string(),
            });
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                reason: "injected write failure".to_string(),
            });
        }
        self.inner.put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_deletes {
            return Err(StoreError::DeleteFailed {
                key: key.to_string(),
                reason: "injected delete failure".to_string(),
            });
        }
        self.inner.delete(key)
    }
}

// ============================================================================
// TESTS
// ============================================================================
