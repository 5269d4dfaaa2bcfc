//! Decentralized identifier (DID) document shapes.
//!
//! Types the W3C-style document format used for `did:hedera` identifiers.
//! DID resolution is out of scope; only the shapes and the identifier
//! format checks live here.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Check `did:hedera:...#<prefix><digits>` identifiers, e.g.
/// `did:hedera:testnet:z6Mk..._0.0.1#service-1`.
fn has_valid_fragment(id: &str, prefix: &str) -> bool {
    let Some(rest) = id.strip_prefix("did:hedera:") else {
        return false;
    };
    let Some(pos) = rest.rfind('#') else {
        return false;
    };
    let Some(digits) = rest[pos + 1..].strip_prefix(prefix) else {
        return false;
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

// ============================================================================
// Services
// ============================================================================

/// DID service type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// A linked-domains service.
    LinkedDomains,
    /// A DIDComm messaging service.
    #[serde(rename = "DIDCommMessaging")]
    DidCommMessaging,
}

impl ServiceType {
    /// Get the wire string for this service type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::LinkedDomains => "LinkedDomains",
            ServiceType::DidCommMessaging => "DIDCommMessaging",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LinkedDomains" => Ok(ServiceType::LinkedDomains),
            "DIDCommMessaging" => Ok(ServiceType::DidCommMessaging),
            other => Err(ValidationError::UnknownEnumValue {
                field: "service_type",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service attached to a DID document.
///
/// # Examples
///
/// ```
/// use hedera_kit::did::{DidService, ServiceType};
///
/// let service = DidService::new(
///     "did:hedera:testnet:z6MkubW6fwkWSA97RbKs17MtLgWGHBtShQygUc5SeHueFCaG_0.0.29613327#service-1",
///     ServiceType::LinkedDomains,
///     "https://example.com",
/// ).unwrap();
/// assert_eq!(service.service_type, ServiceType::LinkedDomains);
///
/// let err = DidService::new("did:hedera:testnet:abc#svc-1", ServiceType::LinkedDomains, "https://example.com")
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Invalid service ID format");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidService {
    /// Service identifier: the DID plus a `#service-N` fragment.
    pub id: String,
    /// Service type.
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    /// Where the service is reachable.
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: String,
}

impl DidService {
    /// Create a validated DID service.
    ///
    /// The `id` must be a `did:hedera` identifier ending in a
    /// `#service-N` fragment.
    pub fn new(
        id: impl Into<String>,
        service_type: ServiceType,
        service_endpoint: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !has_valid_fragment(&id, "service-") {
            return Err(ValidationError::InvalidServiceId(id));
        }
        Ok(Self {
            id,
            service_type,
            service_endpoint: service_endpoint.into(),
        })
    }
}

// ============================================================================
// Verification methods
// ============================================================================

/// DID verification method type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethodType {
    /// Ed25519 verification key, 2018 suite.
    Ed25519VerificationKey2018,
    /// ECDSA secp256k1 verification key, 2019 suite.
    EcdsaSecp256k1VerificationKey2019,
}

impl VerificationMethodType {
    /// Get the wire string for this method type.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethodType::Ed25519VerificationKey2018 => "Ed25519VerificationKey2018",
            VerificationMethodType::EcdsaSecp256k1VerificationKey2019 => {
                "EcdsaSecp256k1VerificationKey2019"
            }
        }
    }
}

impl FromStr for VerificationMethodType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ed25519VerificationKey2018" => {
                Ok(VerificationMethodType::Ed25519VerificationKey2018)
            }
            "EcdsaSecp256k1VerificationKey2019" => {
                Ok(VerificationMethodType::EcdsaSecp256k1VerificationKey2019)
            }
            other => Err(ValidationError::UnknownEnumValue {
                field: "verification_method_type",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for VerificationMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A verification method attached to a DID document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationMethod {
    /// Method identifier: the DID plus a `#key-N` fragment.
    pub id: String,
    /// Method type.
    #[serde(rename = "type")]
    pub method_type: VerificationMethodType,
    /// DID that controls this key.
    pub controller: String,
    /// Multibase-encoded public key.
    #[serde(rename = "publicKeyMultibase")]
    pub public_key_multibase: Option<String>,
}

impl VerificationMethod {
    /// Create a validated verification method.
    ///
    /// The `id` must be a `did:hedera` identifier ending in a `#key-N`
    /// fragment.
    pub fn new(
        id: impl Into<String>,
        method_type: VerificationMethodType,
        controller: impl Into<String>,
        public_key_multibase: Option<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !has_valid_fragment(&id, "key-") {
            return Err(ValidationError::InvalidVerificationMethodId(id));
        }
        Ok(Self {
            id,
            method_type,
            controller: controller.into(),
            public_key_multibase,
        })
    }
}

// ============================================================================
// Document
// ============================================================================

/// A DID document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidDocument {
    /// JSON-LD context URIs.
    #[serde(rename = "@context", default)]
    pub context: Vec<String>,
    /// The document's DID.
    pub id: String,
    /// Controlling DID, when not self-controlled.
    pub controller: Option<String>,
    /// Verification methods.
    #[serde(rename = "verificationMethod", default)]
    pub verification_method: Vec<VerificationMethod>,
    /// Attached services.
    #[serde(default)]
    pub service: Vec<DidService>,
    /// ISO-8601 creation time.
    pub created: Option<String>,
    /// ISO-8601 last-update time.
    pub updated: Option<String>,
}
