//! Session-scoped result store
//!
//! A single slot holding at most one envelope. The raw key/value backend is
//! injected so the same store works with an in-process session slot, a host
//! that has no storage at all, or a test double.
//!
//! Nothing here ever surfaces an error to the caller: corrupt or
//! incompatible payloads read as absent, unavailable storage makes every
//! operation a no-op.

use std::collections::HashMap;
use thiserror::Error;
use crate::STORAGE_KEY;
use crate::core::envelope::decode_envelope;
use crate::types::ResultEnvelope;

/// Backend failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Host environment exposes no session storage
    #[error("session storage is unavailable")]
    Unavailable,
    /// Backend refused the operation
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Raw string slot storage, in the shape of a browser session store
pub trait SlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage; lives exactly as long as the session that owns it
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Storage for hosts without a session store (non-interactive contexts)
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl SlotStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Single-slot envelope store over any [`SlotStorage`]
#[derive(Debug, Default)]
pub struct ResultStore<S: SlotStorage> {
    storage: S,
}

impl<S: SlotStorage> ResultStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Save, overwriting any previous envelope
    pub fn save(&mut self, envelope: &ResultEnvelope) {
        let json = match envelope.to_json() {
            Ok(json) => json,
            Err(reason) => {
                tracing::warn!(reason = reason.code(), "result not saved");
                return;
            }
        };
        match self.storage.write(STORAGE_KEY, json) {
            Ok(()) => tracing::debug!(key = STORAGE_KEY, "result saved"),
            Err(e) => tracing::warn!(error = %e, "result not saved"),
        }
    }

    /// Load the stored envelope; anything unusable reads as absent
    pub fn load(&self) -> Option<ResultEnvelope> {
        let raw = match self.storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "no result storage");
                return None;
            }
        };

        match decode_envelope(&raw) {
            Ok(envelope) => Some(envelope),
            Err(reason) => {
                tracing::warn!(reason = reason.code(), "discarding stored result");
                None
            }
        }
    }

    /// Remove the stored envelope
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            tracing::debug!(error = %e, "nothing to clear");
        }
    }

    /// Is an envelope present (and loadable)?
    pub fn is_present(&self) -> bool {
        self.load().is_some()
    }

    /// Underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Underlying storage, mutable (for hosts that write the slot directly)
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

// =============================================================================
// TESTS
// =============================================================================
