//! The registry collaborator — where credential records live.
//!
//! The core never owns persistence. A real deployment backs this trait
//! with a database; `MemoryRegistry` is the reference implementation used
//! in tests and examples.
//!
//! Required capabilities of any implementation:
//! - `insert` is an atomic check-and-insert (concurrent signups for the
//!   same identity cannot both win)
//! - `get` is an atomic read
//! - `replace` atomically swaps an existing record

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

use crate::record::CredentialRecord;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate identity: {0}")]
    Duplicate(String),

    #[error("Identity not found: {0}")]
    NotFound(String),

    #[error("Registry backend error: {0}")]
    Backend(String),
}

pub trait CredentialRegistry: Send + Sync {
    /// Whether a record exists for `identity`.
    fn exists(&self, identity: &str) -> Result<bool, RegistryError>;

    /// Atomic check-and-insert. `Duplicate` if the identity is taken.
    fn insert(&self, record: CredentialRecord) -> Result<(), RegistryError>;

    /// Fetch the record for `identity`. `NotFound` on miss.
    fn get(&self, identity: &str) -> Result<CredentialRecord, RegistryError>;

    /// Atomic replacement of an existing record. `NotFound` if absent.
    fn replace(&self, record: CredentialRecord) -> Result<(), RegistryError>;
}

/// In-memory registry — stand-in for a real persistence layer.
#[derive(Default)]
pub struct MemoryRegistry {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl CredentialRegistry for MemoryRegistry {
    fn exists(&self, identity: &str) -> Result<bool, RegistryError> {
        Ok(self.records.read().contains_key(identity))
    }

    fn insert(&self, record: CredentialRecord) -> Result<(), RegistryError> {
        let mut records = self.records.write();
        match records.entry(record.identity.clone()) {
            Entry::Occupied(_) => Err(RegistryError::Duplicate(record.identity)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, identity: &str) -> Result<CredentialRecord, RegistryError> {
        self.records
            .read()
            .get(identity)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(identity.to_string()))
    }

    fn replace(&self, record: CredentialRecord) -> Result<(), RegistryError> {
        let mut records = self.records.write();
        match records.entry(record.identity.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                Ok(())
            }
            Entry::Vacant(_) => Err(RegistryError::NotFound(record.identity)),
        }
    }
}
