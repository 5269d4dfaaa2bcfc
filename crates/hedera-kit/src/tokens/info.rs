//! Token information views.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::error::ValidationError;
use crate::fees::CustomFees;
use crate::types::{ConsensusTimestamp, EntityId, PublicKey};

/// Token class: divisible-fungible or uniquely-serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Divisible, interchangeable units.
    FungibleCommon,
    /// Uniquely serial-numbered, non-divisible instances.
    NonFungibleUnique,
}

impl TokenType {
    /// Get the wire string for this token type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::FungibleCommon => "FUNGIBLE_COMMON",
            TokenType::NonFungibleUnique => "NON_FUNGIBLE_UNIQUE",
        }
    }
}

impl FromStr for TokenType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FUNGIBLE_COMMON" => Ok(TokenType::FungibleCommon),
            "NON_FUNGIBLE_UNIQUE" => Ok(TokenType::NonFungibleUnique),
            other => Err(ValidationError::UnknownEnumValue {
                field: "token_type",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a token's supply is capped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyType {
    /// Supply is capped at `max_supply`.
    Finite,
    /// Supply is unbounded.
    Infinite,
}

impl SupplyType {
    /// Get the wire string for this supply type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyType::Finite => "FINITE",
            SupplyType::Infinite => "INFINITE",
        }
    }
}

impl FromStr for SupplyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FINITE" => Ok(SupplyType::Finite),
            "INFINITE" => Ok(SupplyType::Infinite),
            other => Err(ValidationError::UnknownEnumValue {
                field: "supply_type",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for SupplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token pause status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PauseStatus {
    /// The token has no pause key.
    #[default]
    NotApplicable,
    /// Transfers are paused.
    Paused,
    /// Transfers are not paused.
    Unpaused,
}

impl PauseStatus {
    /// Get the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseStatus::NotApplicable => "NOT_APPLICABLE",
            PauseStatus::Paused => "PAUSED",
            PauseStatus::Unpaused => "UNPAUSED",
        }
    }
}

impl FromStr for PauseStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_APPLICABLE" => Ok(PauseStatus::NotApplicable),
            "PAUSED" => Ok(PauseStatus::Paused),
            "UNPAUSED" => Ok(PauseStatus::Unpaused),
            other => Err(ValidationError::UnknownEnumValue {
                field: "pause_status",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for PauseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token information from `/api/v1/tokens/{id}`.
///
/// Supply quantities cross the wire as decimal strings and are parsed into
/// integers here; serialization writes them back as strings.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Key that can update the token, if any.
    pub admin_key: Option<PublicKey>,
    /// Account paying auto-renew fees.
    pub auto_renew_account: Option<EntityId>,
    /// Auto-renew period in seconds.
    pub auto_renew_period: Option<i64>,
    /// When the token was created.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// Custom fee schedule attached to the token.
    #[serde(default)]
    pub custom_fees: CustomFees,
    /// Display decimals.
    #[serde_as(as = "DisplayFromStr")]
    pub decimals: u32,
    /// Whether the token has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Expiry in epoch nanoseconds.
    pub expiry_timestamp: Option<i64>,
    /// Key that can change the fee schedule.
    pub fee_schedule_key: Option<PublicKey>,
    /// Whether new associations start frozen.
    #[serde(default)]
    pub freeze_default: bool,
    /// Key that can freeze accounts for this token.
    pub freeze_key: Option<PublicKey>,
    /// Supply minted at creation.
    #[serde_as(as = "DisplayFromStr")]
    pub initial_supply: u64,
    /// Key that can grant or revoke KYC.
    pub kyc_key: Option<PublicKey>,
    /// Supply cap, when `supply_type` is `FINITE`.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_supply: Option<u64>,
    /// Token memo.
    #[serde(default)]
    pub memo: String,
    /// Last modification time.
    pub modified_timestamp: Option<ConsensusTimestamp>,
    /// Human-readable token name.
    pub name: String,
    /// Key that can pause transfers.
    pub pause_key: Option<PublicKey>,
    /// Current pause status.
    #[serde(default)]
    pub pause_status: PauseStatus,
    /// Key that can mint and burn.
    pub supply_key: Option<PublicKey>,
    /// Whether supply is capped.
    pub supply_type: SupplyType,
    /// Token symbol.
    pub symbol: String,
    /// The token's entity ID.
    pub token_id: EntityId,
    /// Current total supply.
    #[serde_as(as = "DisplayFromStr")]
    pub total_supply: u64,
    /// Treasury account holding unreleased supply.
    pub treasury_account_id: Option<EntityId>,
    /// Token class.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Key that can wipe balances.
    pub wipe_key: Option<PublicKey>,
}

impl TokenInfo {
    /// Whether this is a non-fungible (uniquely serialized) token.
    pub fn is_nft(&self) -> bool {
        self.token_type == TokenType::NonFungibleUnique
    }

    /// Whether this is a fungible token.
    pub fn is_fungible(&self) -> bool {
        self.token_type == TokenType::FungibleCommon
    }
}
