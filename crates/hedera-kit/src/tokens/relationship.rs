//! Account-token relationship views.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId};

/// Freeze status of an account for a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreezeStatus {
    /// The token has no freeze key.
    #[default]
    NotApplicable,
    /// The account is frozen for this token.
    Frozen,
    /// The account is not frozen.
    Unfrozen,
}

impl FreezeStatus {
    /// Get the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FreezeStatus::NotApplicable => "NOT_APPLICABLE",
            FreezeStatus::Frozen => "FROZEN",
            FreezeStatus::Unfrozen => "UNFROZEN",
        }
    }

    /// Whether transfers are blocked by a freeze.
    pub fn is_frozen(&self) -> bool {
        matches!(self, FreezeStatus::Frozen)
    }
}

impl FromStr for FreezeStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_APPLICABLE" => Ok(FreezeStatus::NotApplicable),
            "FROZEN" => Ok(FreezeStatus::Frozen),
            "UNFROZEN" => Ok(FreezeStatus::Unfrozen),
            other => Err(ValidationError::UnknownEnumValue {
                field: "freeze_status",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for FreezeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// KYC status of an account for a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    /// The token has no KYC key.
    #[default]
    NotApplicable,
    /// KYC has been granted.
    Granted,
    /// KYC has been revoked.
    Revoked,
}

impl KycStatus {
    /// Get the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotApplicable => "NOT_APPLICABLE",
            KycStatus::Granted => "GRANTED",
            KycStatus::Revoked => "REVOKED",
        }
    }

    /// Whether the account can transact under KYC rules.
    pub fn is_granted(&self) -> bool {
        matches!(self, KycStatus::Granted)
    }
}

impl FromStr for KycStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_APPLICABLE" => Ok(KycStatus::NotApplicable),
            "GRANTED" => Ok(KycStatus::Granted),
            "REVOKED" => Ok(KycStatus::Revoked),
            other => Err(ValidationError::UnknownEnumValue {
                field: "kyc_status",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account's relationship to a token, from `/api/v1/accounts/{id}/tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRelationship {
    /// Whether the association was made automatically.
    #[serde(default)]
    pub automatic_association: bool,
    /// Balance in the token's smallest unit.
    pub balance: u64,
    /// When the association was created.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// The token's display decimals.
    #[serde(default)]
    pub decimals: u32,
    /// Freeze status for this account.
    #[serde(default)]
    pub freeze_status: FreezeStatus,
    /// KYC status for this account.
    #[serde(default)]
    pub kyc_status: KycStatus,
    /// The token.
    pub token_id: EntityId,
}
