//! Error types for key parsing and lifecycle hooks.

use thiserror::Error;

/// A result type using `HookError`.
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors that can occur when parsing a record key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The input string contains invalid hexadecimal characters.
    #[error("invalid hex encoding")]
    InvalidHex,

    /// The input decodes to an incorrect number of bytes.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// The expected number of bytes.
        expected: usize,
        /// The actual number of bytes.
        got: usize,
    },
}

/// Errors raised by the record lifecycle hooks.
///
/// Both kinds are fatal to the surrounding operation. Neither is transient,
/// so there is no retry path: a violation is a caller error and a
/// generation failure is an environment failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// An update attempted to change an already-assigned key.
    #[error("attempted to change an immutable record key")]
    ImmutableKeyViolation,

    /// The random source failed to produce a usable key.
    #[error("record key generation produced an empty key")]
    GenerationFailure,
}
