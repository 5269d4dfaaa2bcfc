//! Account views, staking info, and transaction identity models.
//!
//! Field names on the view structs mirror the REST API verbatim - they are
//! a compatibility surface, not a design choice.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId, Hbar, PublicKey};

// ============================================================================
// Account views
// ============================================================================

/// Account information from `/api/v1/accounts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// The account's entity ID.
    pub account: EntityId,
    /// Account alias in base32, if one was set at creation.
    pub alias: Option<String>,
    /// Auto-renew period in seconds.
    pub auto_renew_period: Option<i64>,
    /// Balance snapshot with per-token balances.
    pub balance: AccountBalance,
    /// When the account was created.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// Whether the account declines staking rewards.
    #[serde(default)]
    pub decline_reward: bool,
    /// Whether the account has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Nonce used for Ethereum-style transactions.
    pub ethereum_nonce: Option<i64>,
    /// 20-byte EVM address, hex with `0x` prefix.
    pub evm_address: Option<String>,
    /// When the account expires.
    pub expiry_timestamp: Option<ConsensusTimestamp>,
    /// The account's key, if it is a simple key.
    pub key: Option<PublicKey>,
    /// Maximum automatic token association slots.
    pub max_automatic_token_associations: Option<i32>,
    /// Account memo.
    #[serde(default)]
    pub memo: String,
    /// Staking reward accrued but not yet paid out.
    pub pending_reward: Option<Hbar>,
    /// Whether incoming transfers require this account's signature.
    pub receiver_sig_required: Option<bool>,
    /// Account this account is staked to, if staking to an account.
    pub staked_account_id: Option<EntityId>,
    /// Node this account is staked to, if staking to a node.
    pub staked_node_id: Option<i64>,
    /// Start of the current staking period.
    pub stake_period_start: Option<ConsensusTimestamp>,
}

impl AccountInfo {
    /// Extract the staking-related fields as a [`StakingInfo`] view.
    pub fn staking_info(&self) -> StakingInfo {
        StakingInfo {
            staked_account_id: self.staked_account_id,
            staked_node_id: self.staked_node_id,
            stake_period_start: self.stake_period_start.clone(),
            pending_reward: self.pending_reward.unwrap_or(Hbar::ZERO),
            decline_reward: self.decline_reward,
        }
    }
}

/// Balance snapshot for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// When the snapshot was taken.
    pub timestamp: Option<ConsensusTimestamp>,
    /// Hbar balance in tinybars.
    pub balance: Hbar,
    /// Per-token balances.
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
}

/// A single token balance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// The token.
    pub token_id: EntityId,
    /// Balance in the token's smallest unit.
    pub balance: u64,
}

// ============================================================================
// Staking
// ============================================================================

/// Staking-related fields of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingInfo {
    /// Account this account is staked to, if staking to an account.
    pub staked_account_id: Option<EntityId>,
    /// Node this account is staked to, if staking to a node.
    pub staked_node_id: Option<i64>,
    /// Start of the current staking period.
    pub stake_period_start: Option<ConsensusTimestamp>,
    /// Reward accrued but not yet paid out.
    pub pending_reward: Hbar,
    /// Whether rewards are declined.
    pub decline_reward: bool,
}

impl StakingInfo {
    /// Whether the account stakes to a network node.
    pub fn is_staked_to_node(&self) -> bool {
        self.staked_node_id.is_some()
    }

    /// Whether the account stakes to another account.
    pub fn is_staked_to_account(&self) -> bool {
        self.staked_account_id.is_some()
    }
}

/// A paid staking reward, from `/api/v1/accounts/{id}/rewards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingReward {
    /// The rewarded account.
    pub account_id: EntityId,
    /// Reward amount in tinybars.
    pub amount: Hbar,
    /// When the reward was paid.
    pub timestamp: ConsensusTimestamp,
}

// ============================================================================
// Transaction identity
// ============================================================================

/// A transaction nonce. Always a non-negative integer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Nonce(u64);

impl Nonce {
    /// The zero nonce (the common case for user-submitted transactions).
    pub const ZERO: Self = Self(0);

    /// Validate and wrap a nonce value.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::InvalidNonce(value));
        }
        Ok(Self(value as u64))
    }

    /// The nonce value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Nonce {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Nonce> for i64 {
    fn from(nonce: Nonce) -> i64 {
        nonce.0 as i64
    }
}

impl Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transaction identity: paying account, valid-start timestamp, nonce,
/// and scheduled flag.
///
/// # Examples
///
/// ```
/// use hedera_kit::{ConsensusTimestamp, EntityId, TransactionId};
///
/// let id = TransactionId::new(
///     "0.0.1234".parse().unwrap(),
///     "1586567700.453054000".parse().unwrap(),
///     0,
///     false,
/// ).unwrap();
/// assert_eq!(id.to_string(), "0.0.1234@1586567700.453054000");
///
/// let err = TransactionId::new(
///     "0.0.1234".parse::<EntityId>().unwrap(),
///     "1586567700.453054000".parse::<ConsensusTimestamp>().unwrap(),
///     -1,
///     false,
/// ).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid nonce: must be a non-negative integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId {
    /// The paying account.
    pub account_id: EntityId,
    /// Start of the transaction's validity window.
    pub transaction_valid_start: ConsensusTimestamp,
    /// Nonce distinguishing child transactions.
    #[serde(default)]
    pub nonce: Nonce,
    /// Whether this identifies a scheduled transaction.
    #[serde(default)]
    pub scheduled: bool,
}

impl TransactionId {
    /// Create a validated transaction identity.
    ///
    /// Fails with `"Invalid nonce: must be a non-negative integer"` when
    /// `nonce` is negative.
    pub fn new(
        account_id: EntityId,
        transaction_valid_start: ConsensusTimestamp,
        nonce: i64,
        scheduled: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_id,
            transaction_valid_start,
            nonce: Nonce::new(nonce)?,
            scheduled,
        })
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.transaction_valid_start)?;
        if self.scheduled {
            write!(f, "?scheduled")?;
        }
        if self.nonce != Nonce::ZERO {
            write!(f, "/{}", self.nonce)?;
        }
        Ok(())
    }
}

// ============================================================================
// Transfers
// ============================================================================

/// A single positive-amount transfer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The credited account.
    pub account: EntityId,
    /// Amount in tinybars.
    pub amount: i64,
    /// Whether the transfer spends an allowance.
    #[serde(default)]
    pub is_approval: bool,
}

impl Transfer {
    /// Create a validated transfer.
    ///
    /// The amount must be a positive integer; zero and negative amounts
    /// are rejected.
    pub fn new(account: EntityId, amount: i64, is_approval: bool) -> Result<Self, ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NotPositive {
                field: "amount",
                value: amount,
            });
        }
        Ok(Self {
            account,
            amount,
            is_approval,
        })
    }
}
