//! The record contract and its lifecycle hooks.
//!
//! [`KeyedRecord`] is implemented by record types that carry an immutable
//! binary key. The three hooks are default methods, invoked explicitly by
//! the persistence layer:
//!
//! - [`KeyedRecord::on_create`] before the first write
//! - [`KeyedRecord::on_update`] before every subsequent write
//! - [`KeyedRecord::on_retrieve`] after every load
//!
//! A record only supplies the key accessors; the hook behavior is shared.

use crate::error::HookError;
use crate::key::RecordKey;

/// Field-type declarations for a record's identity columns.
///
/// The static counterpart of a dynamic cast table: which field holds the
/// opaque key, which (if any) holds a legacy integer identity, and that
/// the key does not auto-increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySchema {
    /// Name of the key field in the storage schema.
    pub key_field: &'static str,
    /// Optional legacy numeric identity field, read as an integer.
    pub numeric_id_field: Option<&'static str>,
    /// Whether the key auto-increments. Random keys never do.
    pub incrementing: bool,
}

impl Default for KeySchema {
    fn default() -> Self {
        Self {
            key_field: "key",
            numeric_id_field: Some("id"),
            incrementing: false,
        }
    }
}

/// Contract for records carrying an immutable binary key.
///
/// The key is an explicit optional field: `None` means "not yet assigned",
/// with no in-band empty-string sentinel.
pub trait KeyedRecord {
    /// Returns the record's key, if one has been assigned.
    fn key(&self) -> Option<&RecordKey>;

    /// Assigns the record's key.
    fn set_key(&mut self, key: RecordKey);

    /// Field-type declarations for this record's identity columns.
    #[must_use]
    fn schema() -> KeySchema {
        KeySchema::default()
    }

    /// Hook invoked before a record is persisted for the first time.
    ///
    /// Generates and assigns a fresh key when none is present. A
    /// pre-assigned key is left untouched, so callers can fix keys for
    /// deterministic tests or foreign-originated records.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::GenerationFailure`] if the random source
    /// produced an empty key. Creation must never proceed without one.
    fn on_create(&mut self) -> Result<(), HookError> {
        if self.key().is_none() {
            let key = RecordKey::generate();
            if key.is_nil() {
                return Err(HookError::GenerationFailure);
            }
            tracing::debug!(key = %key, field = Self::schema().key_field, "assigned record key");
            self.set_key(key);
        }
        tracing::trace!(schema = ?Self::schema(), "confirmed key schema on create");
        Ok(())
    }

    /// Hook invoked before an already-persisted record is written again.
    ///
    /// `stored` is the previously persisted copy, supplied by the store.
    /// Only the key is inspected.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ImmutableKeyViolation`] if this record's key
    /// differs from the stored one in any way: changed, cleared, or newly
    /// set to a different value. The caller must abort the write.
    fn on_update(&self, stored: &Self) -> Result<(), HookError>
    where
        Self: Sized,
    {
        if self.key() != stored.key() {
            return Err(HookError::ImmutableKeyViolation);
        }
        Ok(())
    }

    /// Hook invoked after a record is loaded from storage.
    ///
    /// Metadata bookkeeping only. Typed deserialization already fixes the
    /// in-memory representation, so this confirms the schema and mutates
    /// nothing.
    fn on_retrieve(&self) {
        tracing::trace!(schema = ?Self::schema(), "confirmed key schema on retrieve");
    }

    /// The derived read-only display form of the key.
    ///
    /// Returns `None` while no key has been assigned. The hex form is
    /// computed on every read, never stored.
    fn display_key(&self) -> Option<String> {
        self.key().map(RecordKey::to_hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        key: Option<RecordKey>,
        body: String,
    }

    impl KeyedRecord for Note {
        fn key(&self) -> Option<&RecordKey> {
            self.key.as_ref()
        }

        fn set_key(&mut self, key: RecordKey) {
            self.key = Some(key);
        }
    }

    fn note(body: &str) -> Note {
        Note {
            key: None,
            body: body.to_string(),
        }
    }

    #[test]
    fn create_assigns_key_when_absent() {
        let mut record = note("hello");
        assert!(record.display_key().is_none());

        record.on_create().unwrap();

        let key = record.key().copied().unwrap();
        assert!(!key.is_nil());
        let shown = record.display_key().unwrap();
        assert_eq!(shown.len(), 32);
        assert!(shown
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn create_keeps_preset_key() {
        let preset = RecordKey::from_hex("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let mut record = note("hello");
        record.set_key(preset);

        record.on_create().unwrap();

        assert_eq!(record.key(), Some(&preset));
        assert_eq!(
            record.display_key().as_deref(),
            Some("123e4567e89b12d3a456426614174000")
        );
    }

    #[test]
    fn create_is_idempotent() {
        let mut record = note("hello");
        record.on_create().unwrap();
        let first = record.key().copied().unwrap();

        record.on_create().unwrap();
        assert_eq!(record.key(), Some(&first));
    }

    #[test]
    fn update_with_same_key_passes() {
        let mut stored = note("hello");
        stored.on_create().unwrap();

        let mut incoming = note("changed body");
        incoming.set_key(stored.key().copied().unwrap());

        incoming.on_update(&stored).unwrap();
        assert_eq!(incoming.body, "changed body");
    }

    #[test]
    fn update_with_changed_key_is_rejected() {
        let mut stored = note("hello");
        stored.on_create().unwrap();

        let mut incoming = note("hello");
        incoming.set_key(RecordKey::generate());

        let result = incoming.on_update(&stored);
        assert!(matches!(result, Err(HookError::ImmutableKeyViolation)));
    }

    #[test]
    fn update_with_cleared_key_is_rejected() {
        let mut stored = note("hello");
        stored.on_create().unwrap();

        let incoming = note("hello");
        let result = incoming.on_update(&stored);
        assert!(matches!(result, Err(HookError::ImmutableKeyViolation)));
    }

    #[test]
    fn default_schema() {
        let schema = Note::schema();
        assert_eq!(schema.key_field, "key");
        assert_eq!(schema.numeric_id_field, Some("id"));
        assert!(!schema.incrementing);
    }
}
