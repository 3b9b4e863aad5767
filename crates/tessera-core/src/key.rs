//! The binary record key type.
//!
//! A [`RecordKey`] is the 16 raw bytes of a version-4 UUID with the
//! separators removed. Records store and index the binary form; callers
//! see the lowercase 32-character hex form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// A 16-byte record key, hex-encoded for display.
///
/// Storing the raw bytes keeps the key at 16 bytes instead of the
/// 36-character string form, while the hex display round-trips losslessly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordKey([u8; 16]);

impl RecordKey {
    /// Create a `RecordKey` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create a `RecordKey` from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }

    /// Generate a new random key from a version-4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().into_bytes())
    }

    /// Parse a `RecordKey` from its hex form.
    ///
    /// Hyphens are stripped before decoding, so both the bare 32-character
    /// display form and the conventional hyphenated UUID form are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid hex or does not decode to
    /// exactly 16 bytes.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let compact = s.replace('-', "");
        let bytes = hex::decode(&compact).map_err(|_| KeyError::InvalidHex)?;
        let arr: [u8; 16] = bytes.try_into().map_err(|_| KeyError::InvalidLength {
            expected: 16,
            got: compact.len() / 2,
        })?;
        Ok(Self(arr))
    }

    /// Return the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Return the lowercase hex representation (32 characters, no separators).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// True when every byte is zero.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }
}

impl fmt::Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordKey({})", self.to_hex())
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RecordKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<uuid::Uuid> for RecordKey {
    fn from(uuid: uuid::Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl TryFrom<String> for RecordKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RecordKey> for String {
    fn from(key: RecordKey) -> Self {
        key.to_hex()
    }
}

impl AsRef<[u8]> for RecordKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
