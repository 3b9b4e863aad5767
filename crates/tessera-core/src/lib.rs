//! Immutable binary record keys for persistent records.
//!
//! This crate provides the identifier management attached to records owned
//! by a persistence layer:
//!
//! - **[`RecordKey`]**: a 16-byte key (the raw bytes of a version-4 UUID),
//!   displayed as a lowercase 32-character hex string
//! - **[`KeyedRecord`]**: the record contract whose lifecycle hooks assign
//!   the key exactly once and reject any later change
//! - **Error types**: parse and hook failures shared with the storage layer
//!
//! # Example
//!
//! ```
//! use tessera_core::{KeyedRecord, RecordKey};
//!
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
//! let mut note = Note { key: None, body: "hello".into() };
//! note.on_create().unwrap();
//! assert_eq!(note.display_key().unwrap().len(), 32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod key;
pub mod record;

pub use error::{HookError, KeyError, Result};
pub use key::RecordKey;
pub use record::{KeySchema, KeyedRecord};
