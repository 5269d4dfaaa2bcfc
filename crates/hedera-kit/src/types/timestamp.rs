//! Consensus timestamp types.
//!
//! Timestamps cross this layer as validated strings in the network's
//! `seconds.nanoseconds` form. They are never converted into a structured
//! time type here; callers that need calendar math parse them downstream.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTimestampError;

/// A consensus timestamp in `seconds.nanoseconds` form.
///
/// # Examples
///
/// ```
/// use hedera_kit::ConsensusTimestamp;
///
/// let ts: ConsensusTimestamp = "1586567700.453054000".parse().unwrap();
/// assert_eq!(ts.seconds(), "1586567700");
/// assert_eq!(ts.nanos(), "453054000");
///
/// assert!("1586567700".parse::<ConsensusTimestamp>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConsensusTimestamp(String);

impl ConsensusTimestamp {
    /// Parse and validate a consensus timestamp.
    pub fn new(s: impl Into<String>) -> Result<Self, ParseTimestampError> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), ParseTimestampError> {
        if s.is_empty() {
            return Err(ParseTimestampError::Empty);
        }

        let Some((secs, nanos)) = s.split_once('.') else {
            return Err(ParseTimestampError::InvalidFormat(s.to_string()));
        };

        if secs.is_empty() || !secs.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseTimestampError::InvalidFormat(s.to_string()));
        }

        if nanos.is_empty() || nanos.len() > 9 || !nanos.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseTimestampError::InvalidNanos(s.to_string()));
        }

        Ok(())
    }

    /// The seconds part, as a string.
    pub fn seconds(&self) -> &str {
        // Validated at construction, the dot is always present.
        self.0.split_once('.').map(|(s, _)| s).unwrap_or(&self.0)
    }

    /// The nanoseconds part, as a string.
    pub fn nanos(&self) -> &str {
        self.0.split_once('.').map(|(_, n)| n).unwrap_or("")
    }

    /// Get as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ConsensusTimestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ConsensusTimestamp {
    type Error = ParseTimestampError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConsensusTimestamp {
    type Error = ParseTimestampError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ConsensusTimestamp> for String {
    fn from(ts: ConsensusTimestamp) -> String {
        ts.0
    }
}

impl Display for ConsensusTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ConsensusTimestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A half-open consensus timestamp range, as returned for staking periods
/// and node reward windows. An absent `to` means the range is still open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRange {
    /// Range start (inclusive).
    pub from: ConsensusTimestamp,
    /// Range end (exclusive), if closed.
    pub to: Option<ConsensusTimestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_timestamps() {
        assert!("1586567700.453054000".parse::<ConsensusTimestamp>().is_ok());
        assert!("0.0".parse::<ConsensusTimestamp>().is_ok());
        assert!("1586567700.1".parse::<ConsensusTimestamp>().is_ok());
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(
            "".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::Empty
        );
        assert!(matches!(
            "1586567700".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidFormat(_)
        ));
        assert!(matches!(
            "abc.123".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidFormat(_)
        ));
        assert!(matches!(
            ".453054000".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidFormat(_)
        ));
        assert!(matches!(
            "1586567700.".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidNanos(_)
        ));
        assert!(matches!(
            "1.0123456789".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidNanos(_)
        ));
        assert!(matches!(
            "1.45wat".parse::<ConsensusTimestamp>().unwrap_err(),
            ParseTimestampError::InvalidNanos(_)
        ));
    }

    #[test]
    fn test_parts() {
        let ts: ConsensusTimestamp = "1586567700.453054000".parse().unwrap();
        assert_eq!(ts.seconds(), "1586567700");
        assert_eq!(ts.nanos(), "453054000");
        assert_eq!(ts.as_str(), "1586567700.453054000");
    }

    #[test]
    fn test_value_carried_unchanged() {
        // No normalization: short nanos stay short.
        let ts: ConsensusTimestamp = "1586567700.1".parse().unwrap();
        assert_eq!(ts.to_string(), "1586567700.1");
    }

    #[test]
    fn test_serde_round_trip() {
        let ts: ConsensusTimestamp = "1586567700.453054000".parse().unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"1586567700.453054000\"");
        let back: ConsensusTimestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<ConsensusTimestamp>("\"not-a-timestamp\"").is_err());
    }

    #[test]
    fn test_timestamp_range() {
        let range: TimestampRange = serde_json::from_str(
            r#"{"from": "1655164800.000000000", "to": null}"#,
        )
        .unwrap();
        assert_eq!(range.from.seconds(), "1655164800");
        assert!(range.to.is_none());
    }
}
