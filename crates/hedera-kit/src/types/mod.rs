//! Core types for the Hedera ledger.
//!
//! This module provides hand-rolled types based on mirror-node REST
//! responses, designed for ergonomic use in client applications.

mod entity_id;
mod fraction;
mod hbar;
mod key;
mod timestamp;

pub use entity_id::EntityId;
pub use fraction::Fraction;
pub use hbar::Hbar;
pub use key::{KeyType, PublicKey};
pub use timestamp::{ConsensusTimestamp, TimestampRange};
