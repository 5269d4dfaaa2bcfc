//! Network metadata views: nodes, exchange rates, supply, and fee schedule.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId, Hbar, TimestampRange};

// ============================================================================
// Network nodes
// ============================================================================

/// A gRPC/REST endpoint served by a network node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// IPv4 address, dotted-quad.
    pub ip_address_v4: Option<String>,
    /// TCP port.
    pub port: i32,
    /// DNS name, when the endpoint is addressed by name.
    pub domain_name: Option<String>,
}

impl ServiceEndpoint {
    /// Create a validated service endpoint.
    ///
    /// The port must fit 0..=65535, and at least one of `ip_address_v4`
    /// and `domain_name` must be present.
    pub fn new(
        ip_address_v4: Option<String>,
        port: i32,
        domain_name: Option<String>,
    ) -> Result<Self, ValidationError> {
        if ip_address_v4.is_none() && domain_name.is_none() {
            return Err(ValidationError::MissingField("ip_address_v4"));
        }
        if !(0..=65535).contains(&port) {
            return Err(ValidationError::InvalidPort(port as i64));
        }
        Ok(Self {
            ip_address_v4,
            port,
            domain_name,
        })
    }
}

/// A consensus node, from `/api/v1/network/nodes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Node description text.
    #[serde(default)]
    pub description: String,
    /// Address-book file the entry came from.
    pub file_id: Option<EntityId>,
    /// Stake above which the node earns no additional reward.
    pub max_stake: Option<Hbar>,
    /// Stake below which the node earns no reward.
    pub min_stake: Option<Hbar>,
    /// Node memo.
    #[serde(default)]
    pub memo: String,
    /// Node identifier.
    pub node_id: i64,
    /// The node operator's account.
    pub node_account_id: EntityId,
    /// Hash of the node's TLS certificate, hex.
    pub node_cert_hash: Option<String>,
    /// Node public key in DER, hex.
    pub public_key: Option<String>,
    /// Reward rate at the start of the staking period, in tinybars.
    pub reward_rate_start: Option<i64>,
    /// Endpoints the node serves.
    #[serde(default)]
    pub service_endpoints: Vec<ServiceEndpoint>,
    /// Total stake, rewarded plus not rewarded.
    pub stake: Option<Hbar>,
    /// Stake not eligible for rewards.
    pub stake_not_rewarded: Option<Hbar>,
    /// Stake eligible for rewards.
    pub stake_rewarded: Option<Hbar>,
    /// The staking period the stake figures describe.
    pub staking_period: Option<TimestampRange>,
    /// Validity range of this address-book entry.
    pub timestamp: Option<TimestampRange>,
}

// ============================================================================
// Exchange rate
// ============================================================================

/// An hbar/cent exchange rate.
///
/// The rate is the fraction `cent_equivalent / hbar_equivalent` US cents
/// per hbar, kept as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Cents in the rate fraction.
    pub cent_equivalent: i64,
    /// Hbar in the rate fraction.
    pub hbar_equivalent: i64,
    /// When this rate expires, epoch seconds.
    pub expiration_time: i64,
}

/// Current and next exchange rate, from `/api/v1/network/exchangerate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateInfo {
    /// Rate in effect now.
    pub current_rate: ExchangeRate,
    /// Rate taking effect at the current rate's expiration.
    pub next_rate: ExchangeRate,
    /// When the rates were read.
    pub timestamp: Option<ConsensusTimestamp>,
}

// ============================================================================
// Supply
// ============================================================================

/// Network coin supply, from `/api/v1/network/supply`.
///
/// Supply quantities cross the wire as decimal strings of tinybars.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSupply {
    /// Tinybars in circulation.
    #[serde_as(as = "DisplayFromStr")]
    pub released_supply: u64,
    /// Total tinybars that will ever exist.
    #[serde_as(as = "DisplayFromStr")]
    pub total_supply: u64,
    /// When the supply was read.
    pub timestamp: Option<ConsensusTimestamp>,
}

// ============================================================================
// Transaction fee schedule
// ============================================================================

/// Gas pricing for one transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFee {
    /// Gas cost in tinycents.
    pub gas: i64,
    /// The priced transaction type, e.g. `"ContractCall"`.
    pub transaction_type: String,
}

/// Network fee schedule, from `/api/v1/network/fees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFees {
    /// Per-transaction-type pricing.
    #[serde(default)]
    pub fees: Vec<TransactionFee>,
    /// When the schedule was read.
    pub timestamp: Option<ConsensusTimestamp>,
}
