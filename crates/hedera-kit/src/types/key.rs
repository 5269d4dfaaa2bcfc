//! Public key entity types.
//!
//! The mirror node reports keys as `{"_type": "...", "key": "<hex>"}`
//! entities. Key material stays hex-encoded; this layer validates shape,
//! not curve membership (signing is out of scope).

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKeyError;

/// Key type identifier as reported by the mirror node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// Ed25519 key (most common).
    #[serde(rename = "ED25519")]
    Ed25519,
    /// ECDSA secp256k1 key (for EVM compatibility).
    #[serde(rename = "ECDSA_SECP256K1")]
    EcdsaSecp256k1,
    /// Complex key structure (threshold/key list), protobuf-encoded.
    #[serde(rename = "ProtobufEncoded")]
    ProtobufEncoded,
}

impl KeyType {
    /// Get the wire string for this key type.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ED25519",
            KeyType::EcdsaSecp256k1 => "ECDSA_SECP256K1",
            KeyType::ProtobufEncoded => "ProtobufEncoded",
        }
    }

    /// Expected key length in bytes, if the type has a fixed length.
    pub fn key_len(&self) -> Option<usize> {
        match self {
            KeyType::Ed25519 => Some(32),
            KeyType::EcdsaSecp256k1 => Some(33), // Compressed
            KeyType::ProtobufEncoded => None,
        }
    }
}

impl FromStr for KeyType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ED25519" => Ok(KeyType::Ed25519),
            "ECDSA_SECP256K1" => Ok(KeyType::EcdsaSecp256k1),
            "ProtobufEncoded" => Ok(KeyType::ProtobufEncoded),
            other => Err(ParseKeyError::UnknownKeyType(other.to_string())),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A public key entity: key type plus hex-encoded key material.
///
/// # Examples
///
/// ```
/// use hedera_kit::{KeyType, PublicKey};
///
/// let key = PublicKey::new(
///     KeyType::Ed25519,
///     "aa".repeat(32),
/// ).unwrap();
/// assert_eq!(key.key_type(), KeyType::Ed25519);
///
/// // Wrong length for the declared type
/// assert!(PublicKey::new(KeyType::Ed25519, "aabb").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(rename = "_type")]
    key_type: KeyType,
    key: String,
}

impl PublicKey {
    /// Create a validated public key entity.
    ///
    /// The key material must be valid hex and, for fixed-length key types,
    /// decode to the expected number of bytes.
    pub fn new(key_type: KeyType, key: impl Into<String>) -> Result<Self, ParseKeyError> {
        let key = key.into();
        let bytes = hex::decode(&key).map_err(|e| ParseKeyError::InvalidHex(e.to_string()))?;

        if let Some(expected) = key_type.key_len() {
            if bytes.len() != expected {
                return Err(ParseKeyError::InvalidLength {
                    expected,
                    actual: bytes.len(),
                });
            }
        }

        Ok(Self { key_type, key })
    }

    /// Get the key type.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Get the hex-encoded key material.
    pub fn as_hex(&self) -> &str {
        &self.key
    }

    /// Decode the key material into raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ParseKeyError> {
        hex::decode(&self.key).map_err(|e| ParseKeyError::InvalidHex(e.to_string()))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type, self.key)
    }
}
