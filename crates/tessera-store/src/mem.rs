//! In-memory storage implementation.
//!
//! This module provides the [`MemStore`] implementation of the [`Store`]
//! trait. Records are serialized to CBOR and kept in a `BTreeMap` keyed
//! by the raw key bytes.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tessera_core::{HookError, KeyedRecord, RecordKey};

use crate::error::{Result, StoreError};
use crate::Store;

/// In-memory storage for records of a single type.
///
/// Each store holds one record type, mirroring a table in a real backend.
/// Methods take `&mut self`; the contract is synchronous and per-record,
/// so no interior locking is introduced.
pub struct MemStore<R> {
    rows: BTreeMap<[u8; 16], Vec<u8>>,
    _record: PhantomData<R>,
}

impl<R> MemStore<R> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            _record: PhantomData,
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize a record value using CBOR.
    fn serialize(value: &R) -> Result<Vec<u8>>
    where
        R: Serialize,
    {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a record value from CBOR.
    fn deserialize(data: &[u8]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl<R> Default for MemStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Store<R> for MemStore<R>
where
    R: KeyedRecord + Serialize + DeserializeOwned,
{
    fn create(&mut self, record: &mut R) -> Result<RecordKey> {
        record.on_create()?;

        // on_create guarantees a key; an absent one means generation failed.
        let key = record
            .key()
            .copied()
            .ok_or(StoreError::Hook(HookError::GenerationFailure))?;

        let value = Self::serialize(record)?;
        self.rows.insert(*key.as_bytes(), value);
        Ok(key)
    }

    fn update(&mut self, key: &RecordKey, record: &R) -> Result<()> {
        let data = self.rows.get(key.as_bytes()).ok_or(StoreError::NotFound)?;
        let stored: R = Self::deserialize(data)?;

        record.on_update(&stored)?;

        let value = Self::serialize(record)?;
        self.rows.insert(*key.as_bytes(), value);
        Ok(())
    }

    fn get(&self, key: &RecordKey) -> Result<Option<R>> {
        self.rows
            .get(key.as_bytes())
            .map(|data| {
                let record = Self::deserialize(data)?;
                record.on_retrieve();
                Ok(record)
            })
            .transpose()
    }

    fn delete(&mut self, key: &RecordKey) -> Result<()> {
        self.rows
            .remove(key.as_bytes())
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
