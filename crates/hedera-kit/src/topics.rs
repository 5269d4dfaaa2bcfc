//! Consensus service views: topics and topic messages.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::accounts::TransactionId;
use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId, PublicKey};

/// Topic information from `/api/v1/topics/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Key that can update or delete the topic, if any.
    pub admin_key: Option<PublicKey>,
    /// Account paying auto-renew fees.
    pub auto_renew_account: Option<EntityId>,
    /// Auto-renew period in seconds.
    pub auto_renew_period: Option<i64>,
    /// When the topic was created.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// Whether the topic has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Topic memo.
    #[serde(default)]
    pub memo: String,
    /// Key required to submit messages, if any.
    pub submit_key: Option<PublicKey>,
    /// The topic's entity ID.
    pub topic_id: EntityId,
}

/// Chunk position of a message that was split across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkInfo {
    /// Identity of the first chunk's transaction.
    pub initial_transaction_id: TransactionId,
    /// This chunk's 1-based position.
    pub number: i32,
    /// Total number of chunks.
    pub total: i32,
}

impl ChunkInfo {
    /// Create validated chunk info. `number` and `total` must be positive.
    ///
    /// `number <= total` is not cross-checked; the consensus service owns
    /// that rule.
    pub fn new(
        initial_transaction_id: TransactionId,
        number: i32,
        total: i32,
    ) -> Result<Self, ValidationError> {
        if number <= 0 {
            return Err(ValidationError::NotPositive {
                field: "number",
                value: number as i64,
            });
        }
        if total <= 0 {
            return Err(ValidationError::NotPositive {
                field: "total",
                value: total as i64,
            });
        }
        Ok(Self {
            initial_transaction_id,
            number,
            total,
        })
    }
}

/// An ordered, timestamped message on a topic, from
/// `/api/v1/topics/{id}/messages`.
///
/// `message` and `running_hash` are base64 on the wire and decoded to raw
/// bytes here; serialization re-encodes them.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicMessage {
    /// Chunk position, for messages split across submissions.
    pub chunk_info: Option<ChunkInfo>,
    /// Consensus timestamp assigned to the message.
    pub consensus_timestamp: ConsensusTimestamp,
    /// Message payload bytes.
    #[serde_as(as = "Base64")]
    #[serde(default)]
    pub message: Vec<u8>,
    /// Account that paid for the submission.
    pub payer_account_id: Option<EntityId>,
    /// Running hash of the topic after this message.
    #[serde_as(as = "Base64")]
    #[serde(default)]
    pub running_hash: Vec<u8>,
    /// Version of the running hash algorithm.
    pub running_hash_version: i32,
    /// Sequence number of the message within the topic.
    pub sequence_number: u64,
    /// The topic.
    pub topic_id: EntityId,
}
