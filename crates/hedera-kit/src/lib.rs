//! A clean, typed model layer for Hedera mirror node and ledger services.
//!
//! **hedera-kit** provides hand-rolled, validated Rust types for the JSON
//! shapes of the Hedera mirror-node REST API and the ledger's entity
//! identifiers, with a focus on failing fast on malformed input.
//!
//! # Quick Start
//!
//! ```
//! use hedera_kit::{AccountInfo, EntityId};
//!
//! # fn main() -> Result<(), hedera_kit::Error> {
//! // Validated identifiers
//! let token: EntityId = "0.0.123456".parse()?;
//! assert_eq!(token.num(), 123456);
//!
//! // Typed mirror-node payloads
//! let info: AccountInfo = serde_json::from_str(r#"{
//!     "account": "0.0.1234",
//!     "balance": {"timestamp": null, "balance": 100, "tokens": []},
//!     "memo": ""
//! }"#)?;
//! assert_eq!(info.account, "0.0.1234".parse()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Design Principles
//!
//! 1. **Wire shapes are a compatibility surface**: field names and enum
//!    strings follow the REST API verbatim and are never renamed
//! 2. **Validate at the boundary**: identifiers, nonces, and serial
//!    numbers are newtypes that cannot hold an invalid value, whether
//!    parsed from a string or deserialized from a payload
//! 3. **No transformation**: validated values are stored exactly as
//!    given; timestamps stay strings, fractions stay integer pairs
//! 4. **Fail fast, all or nothing**: a constructor either returns a fully
//!    validated value or an error naming the offending field
//!
//! # Core Types
//!
//! - [`EntityId`] - Validated `shard.realm.num` identifier
//! - [`Hbar`] - Hbar amount with tinybar precision
//! - [`ConsensusTimestamp`] - Validated `seconds.nanoseconds` string
//! - [`Fraction`] - Integer fraction used for percentage fees
//! - [`PublicKey`], [`KeyType`] - Mirror-node key entities
//!
//! # Fee Conversion
//!
//! Validated fee models marshal field-for-field onto SDK-style builders:
//!
//! ```
//! use hedera_kit::FixedFee;
//!
//! # fn main() -> Result<(), hedera_kit::Error> {
//! let fee = FixedFee::new(
//!     10,
//!     Some("0.0.123456".parse()?),
//!     "0.0.789012".parse()?,
//!     false,
//! )?;
//! let builder = fee.to_custom_fixed_fee();
//! assert_eq!(builder.amount, 10);
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod did;
pub mod error;
pub mod fees;
pub mod network;
pub mod tokens;
pub mod topics;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{
    Error, ParseEntityIdError, ParseHbarError, ParseKeyError, ParseTimestampError, ValidationError,
};
pub use types::{ConsensusTimestamp, EntityId, Fraction, Hbar, KeyType, PublicKey, TimestampRange};

// Re-export account types
pub use accounts::{
    AccountBalance, AccountInfo, Nonce, StakingInfo, StakingReward, TokenBalance, TransactionId,
    Transfer,
};

// Re-export token types
pub use tokens::{
    FreezeStatus, KycStatus, Nft, NftTransfer, PauseStatus, SerialNumber, SupplyType, TokenInfo,
    TokenRelationship, TokenType,
};

// Re-export fee types
pub use fees::{
    CustomFees, CustomFixedFee, CustomFractionalFee, CustomRoyaltyFee, FallbackFee,
    FeeAssessmentMethod, FixedFee, FractionalFee, RoyaltyFee,
};

// Re-export topic types
pub use topics::{ChunkInfo, TopicInfo, TopicMessage};

// Re-export network types
pub use network::{
    ExchangeRate, ExchangeRateInfo, NetworkFees, NetworkNode, NetworkSupply, ServiceEndpoint,
    TransactionFee,
};

// Re-export DID types
pub use did::{
    DidDocument, DidService, ServiceType, VerificationMethod, VerificationMethodType,
};
