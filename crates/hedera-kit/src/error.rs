//! Error types for hedera-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by most operations
//!   - [`ParseEntityIdError`] — Invalid `shard.realm.num` entity ID
//!   - [`ParseTimestampError`] — Invalid consensus timestamp
//!   - [`ParseHbarError`] — Invalid hbar amount format
//!   - [`ParseKeyError`] — Invalid public key entity
//!   - [`ValidationError`] — Model constructor checks (field presence,
//!     positive amounts, enum membership, identifier patterns)
//!
//! Validation is all-or-nothing: a constructor either returns a fully
//! validated value or an error naming the offending field. Nothing is
//! partially constructed and nothing is retried at this layer.
//!
//! # Example
//!
//! ```
//! use hedera_kit::{EntityId, ParseEntityIdError};
//!
//! let err = "0.0.1234.5".parse::<EntityId>().unwrap_err();
//! assert!(matches!(err, ParseEntityIdError::InvalidFormat(_)));
//! ```

use thiserror::Error;

/// Error parsing an entity ID.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEntityIdError {
    #[error("Entity ID is empty")]
    Empty,

    #[error("Entity ID '{0}' has invalid format, expected 'shard.realm.num'")]
    InvalidFormat(String),

    #[error("Entity ID '{0}' has non-numeric part '{1}'")]
    InvalidNumber(String, String),

    #[error("Entity ID '{0}' has a part larger than 64 bits")]
    Overflow(String),
}

/// Error parsing a consensus timestamp.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTimestampError {
    #[error("Timestamp is empty")]
    Empty,

    #[error("Timestamp '{0}' has invalid format, expected 'seconds.nanoseconds'")]
    InvalidFormat(String),

    #[error("Timestamp '{0}' has invalid nanoseconds (expected 1 to 9 digits)")]
    InvalidNanos(String),
}

/// Error parsing an hbar amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseHbarError {
    #[error("Ambiguous amount '{0}'. Use explicit units like '5 hbar' or '100 tinybar'")]
    AmbiguousAmount(String),

    #[error("Invalid amount format: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid number in amount: '{0}'")]
    InvalidNumber(String),

    #[error("Amount overflow: value too large")]
    Overflow,
}

/// Error parsing a public key entity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("Unknown key type: '{0}'")]
    UnknownKeyType(String),

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Error from a validating model constructor.
///
/// Display strings name the offending field and the violated rule, so they
/// can be surfaced directly to callers without further formatting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid nonce: must be a non-negative integer")]
    InvalidNonce(i64),

    #[error("Invalid {field}: must be a positive integer")]
    NotPositive { field: &'static str, value: i64 },

    #[error("Invalid service ID format")]
    InvalidServiceId(String),

    #[error("Invalid verification method ID format")]
    InvalidVerificationMethodId(String),

    #[error("Invalid port: {0} is outside 0..=65535")]
    InvalidPort(i64),

    #[error("Invalid {field}: '{value}' is not one of the allowed values")]
    UnknownEnumValue { field: &'static str, value: String },
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for hedera-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Parsing ───
    #[error(transparent)]
    ParseEntityId(#[from] ParseEntityIdError),

    #[error(transparent)]
    ParseTimestamp(#[from] ParseTimestampError),

    #[error(transparent)]
    ParseHbar(#[from] ParseHbarError),

    #[error(transparent)]
    ParseKey(#[from] ParseKeyError),

    // ─── Validation ───
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ─── Serialization ───
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
