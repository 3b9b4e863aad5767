//! In-memory persistence collaborator for keyed records.
//!
//! This crate provides the persistence side of the record-key contract: a
//! [`Store`] trait whose implementations invoke the lifecycle hooks of
//! [`tessera_core::KeyedRecord`] at the three points the contract defines,
//! and [`MemStore`], a CBOR-backed in-memory implementation.
//!
//! Rows are keyed by the raw 16 key bytes, so the compact binary key is
//! the storage key as well as the record field.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tessera_core::{KeyedRecord, RecordKey};
//! use tessera_store::{MemStore, Store};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Note {
//!     key: Option<RecordKey>,
//!     body: String,
//! }
//!
//! impl KeyedRecord for Note {
//!     fn key(&self) -> Option<&RecordKey> {
//!         self.key.as_ref()
//!     }
//!     fn set_key(&mut self, key: RecordKey) {
//!         self.key = Some(key);
//!     }
//! }
//!
//! let mut store = MemStore::new();
//! let mut note = Note { key: None, body: "hello".into() };
//! let key = store.create(&mut note).unwrap();
//!
//! let loaded: Note = store.get(&key).unwrap().unwrap();
//! assert_eq!(loaded.display_key(), note.display_key());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod mem;

pub use error::{Result, StoreError};
pub use mem::MemStore;

use tessera_core::{KeyedRecord, RecordKey};

/// The storage trait defining the record lifecycle operations.
///
/// Implementations are responsible for invoking the record's hooks: the
/// component model is synchronous and per-record, so every method takes
/// effect entirely or not at all.
pub trait Store<R: KeyedRecord> {
    /// Persist a record for the first time.
    ///
    /// Runs the record's `on_create` hook, which assigns a key when none
    /// is present, then writes the record under its raw key bytes. The
    /// assigned key is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if key generation fails or the record cannot be
    /// serialized.
    fn create(&mut self, record: &mut R) -> Result<RecordKey>;

    /// Persist changes to an existing record.
    ///
    /// Loads the stored copy under `key`, runs the record's `on_update`
    /// hook against it, and only then overwrites. A hook rejection aborts
    /// the write entirely; the stored value is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record exists under `key`, or
    /// `StoreError::Hook` if the record's key was changed.
    fn update(&mut self, key: &RecordKey, record: &R) -> Result<()>;

    /// Load a record by key.
    ///
    /// Runs the record's `on_retrieve` hook on the loaded copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bytes cannot be deserialized.
    fn get(&self, key: &RecordKey) -> Result<Option<R>>;

    /// Delete a record by key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record doesn't exist.
    fn delete(&mut self, key: &RecordKey) -> Result<()>;
}
