//! Non-fungible token entity views.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId};

/// An NFT serial number. Always a positive integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SerialNumber(i64);

impl SerialNumber {
    /// Validate and wrap a serial number.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NotPositive {
                field: "serial_number",
                value,
            });
        }
        Ok(Self(value))
    }

    /// The serial number value.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for SerialNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SerialNumber> for i64 {
    fn from(serial: SerialNumber) -> i64 {
        serial.0
    }
}

impl Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single NFT instance, from `/api/v1/tokens/{id}/nfts/{serial}`.
///
/// `metadata` is base64 on the wire and decoded to raw bytes here;
/// serialization re-encodes it.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nft {
    /// Current owner.
    pub account_id: Option<EntityId>,
    /// When the NFT was minted.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// Spender with owner-delegated approval, if any.
    pub delegating_spender: Option<EntityId>,
    /// Whether the NFT has been burned or wiped.
    #[serde(default)]
    pub deleted: bool,
    /// Metadata bytes attached at mint.
    #[serde_as(as = "Base64")]
    #[serde(default)]
    pub metadata: Vec<u8>,
    /// Last modification time.
    pub modified_timestamp: Option<ConsensusTimestamp>,
    /// Serial number within the collection.
    pub serial_number: SerialNumber,
    /// Approved spender, if any.
    pub spender: Option<EntityId>,
    /// The collection this NFT belongs to.
    pub token_id: EntityId,
}

/// An NFT ownership change, from the transaction endpoint's
/// `nft_transfers` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransfer {
    /// Whether the transfer spends an allowance.
    #[serde(default)]
    pub is_approval: bool,
    /// Receiving account.
    pub receiver_account_id: Option<EntityId>,
    /// Sending account (absent for mints).
    pub sender_account_id: Option<EntityId>,
    /// Serial number moved.
    pub serial_number: SerialNumber,
    /// The collection.
    pub token_id: EntityId,
}
