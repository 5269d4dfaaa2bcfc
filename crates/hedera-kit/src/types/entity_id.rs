//! Entity ID type with validation.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEntityIdError;

/// A ledger entity identifier in `shard.realm.num` form.
///
/// The same triplet of non-negative integers addresses accounts, tokens,
/// consensus topics, files, and contracts. The textual form is exactly three
/// dot-separated base-10 numbers, e.g. `"0.0.1234"`.
///
/// # Examples
///
/// ```
/// use hedera_kit::EntityId;
///
/// let id: EntityId = "0.0.1234".parse().unwrap();
/// assert_eq!(id.num(), 1234);
/// assert_eq!(id.to_string(), "0.0.1234");
///
/// assert!("abc".parse::<EntityId>().is_err());
/// assert!("0.1234".parse::<EntityId>().is_err());
/// assert!("0.0.1234.5".parse::<EntityId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    shard: u64,
    realm: u64,
    num: u64,
}

impl EntityId {
    /// Create from explicit shard, realm, and entity number.
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Create from an entity number in shard 0, realm 0.
    pub const fn from_num(num: u64) -> Self {
        Self {
            shard: 0,
            realm: 0,
            num,
        }
    }

    /// Shard number.
    pub const fn shard(&self) -> u64 {
        self.shard
    }

    /// Realm number.
    pub const fn realm(&self) -> u64 {
        self.realm
    }

    /// Entity number within the realm.
    pub const fn num(&self) -> u64 {
        self.num
    }

    fn parse(s: &str) -> Result<Self, ParseEntityIdError> {
        if s.is_empty() {
            return Err(ParseEntityIdError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(ParseEntityIdError::InvalidFormat(s.to_string()));
        }

        let mut nums = [0u64; 3];
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseEntityIdError::InvalidNumber(
                    s.to_string(),
                    part.to_string(),
                ));
            }
            nums[i] = part
                .parse()
                .map_err(|_| ParseEntityIdError::Overflow(s.to_string()))?;
        }

        Ok(Self {
            shard: nums[0],
            realm: nums[1],
            num: nums[2],
        })
    }
}

impl FromStr for EntityId {
    type Err = ParseEntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = ParseEntityIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ParseEntityIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> String {
        id.to_string()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}
