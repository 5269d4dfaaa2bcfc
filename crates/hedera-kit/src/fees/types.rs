//! Validated custom fee value objects.
//!
//! These model the `custom_fees` section of a token as the mirror node
//! returns it. Constructors fail fast on malformed input; the conversion
//! methods marshal validated fees field-for-field onto the SDK-style
//! builders in [`custom`](super::custom).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::types::{ConsensusTimestamp, EntityId, Fraction};

use super::custom::{CustomFixedFee, CustomFractionalFee, CustomRoyaltyFee, FeeAssessmentMethod};

// ============================================================================
// Fixed fee
// ============================================================================

/// A fixed fee attached to a token's custom fee schedule.
///
/// # Examples
///
/// ```
/// use hedera_kit::FixedFee;
///
/// let fee = FixedFee::new(
///     10,
///     Some("0.0.123456".parse().unwrap()),
///     "0.0.789012".parse().unwrap(),
///     false,
/// ).unwrap();
///
/// let builder = fee.to_custom_fixed_fee();
/// assert_eq!(builder.amount, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFee {
    /// Fee amount in the denominating token's smallest unit
    /// (tinybars when no denominating token is set).
    pub amount: i64,
    /// Token the fee is denominated in; `None` means hbar.
    pub denominating_token_id: Option<EntityId>,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    #[serde(default)]
    pub all_collectors_are_exempt: bool,
}

impl FixedFee {
    /// Create a validated fixed fee. The amount must be positive.
    pub fn new(
        amount: i64,
        denominating_token_id: Option<EntityId>,
        collector_account_id: EntityId,
        all_collectors_are_exempt: bool,
    ) -> Result<Self, ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NotPositive {
                field: "amount",
                value: amount,
            });
        }
        Ok(Self {
            amount,
            denominating_token_id,
            collector_account_id: Some(collector_account_id),
            all_collectors_are_exempt,
        })
    }

    /// Marshal onto an SDK-style fixed fee builder.
    pub fn to_custom_fixed_fee(&self) -> CustomFixedFee {
        debug!(amount = self.amount, "Converting fixed fee to builder");
        let mut fee = CustomFixedFee::new()
            .amount(self.amount)
            .all_collectors_are_exempt(self.all_collectors_are_exempt);
        if let Some(collector) = self.collector_account_id {
            fee = fee.collector_account_id(collector);
        }
        if let Some(token) = self.denominating_token_id {
            fee = fee.denominating_token_id(token);
        }
        fee
    }
}

// ============================================================================
// Fractional fee
// ============================================================================

/// A fractional (percentage) fee attached to a token's custom fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionalFee {
    /// Fee fraction of the transferred amount.
    pub amount: Fraction,
    /// Token the fee is denominated in (the token itself).
    pub denominating_token_id: Option<EntityId>,
    /// Minimum assessed amount.
    #[serde(default)]
    pub minimum: i64,
    /// Maximum assessed amount; absent means unbounded.
    pub maximum: Option<i64>,
    /// Whether the fee is charged on top of the transfer instead of
    /// out of it.
    #[serde(default)]
    pub net_of_transfers: bool,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    #[serde(default)]
    pub all_collectors_are_exempt: bool,
}

impl FractionalFee {
    /// Create a validated fractional fee. The fraction numerator must be
    /// positive.
    ///
    /// A zero denominator is accepted and only logged: the ledger owns
    /// that rule, and this layer does not guess it. `minimum` vs
    /// `maximum` ordering is likewise left to the ledger.
    pub fn new(
        amount: Fraction,
        denominating_token_id: Option<EntityId>,
        minimum: i64,
        maximum: Option<i64>,
        net_of_transfers: bool,
        collector_account_id: EntityId,
        all_collectors_are_exempt: bool,
    ) -> Result<Self, ValidationError> {
        if amount.numerator <= 0 {
            return Err(ValidationError::NotPositive {
                field: "numerator",
                value: amount.numerator,
            });
        }
        if amount.denominator == 0 {
            warn!(
                numerator = amount.numerator,
                "Fractional fee has a zero denominator"
            );
        }
        Ok(Self {
            amount,
            denominating_token_id,
            minimum,
            maximum,
            net_of_transfers,
            collector_account_id: Some(collector_account_id),
            all_collectors_are_exempt,
        })
    }

    /// Marshal onto an SDK-style fractional fee builder.
    ///
    /// `net_of_transfers` maps to the exclusive assessment method.
    pub fn to_custom_fractional_fee(&self) -> CustomFractionalFee {
        debug!(amount = %self.amount, "Converting fractional fee to builder");
        let method = if self.net_of_transfers {
            FeeAssessmentMethod::Exclusive
        } else {
            FeeAssessmentMethod::Inclusive
        };
        let mut fee = CustomFractionalFee::new()
            .numerator(self.amount.numerator)
            .denominator(self.amount.denominator)
            .minimum(self.minimum)
            .assessment_method(method)
            .all_collectors_are_exempt(self.all_collectors_are_exempt);
        if let Some(maximum) = self.maximum {
            fee = fee.maximum(maximum);
        }
        if let Some(collector) = self.collector_account_id {
            fee = fee.collector_account_id(collector);
        }
        fee
    }
}

// ============================================================================
// Royalty fee
// ============================================================================

/// The fixed fee charged when a royalty fee applies but no fungible value
/// is exchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackFee {
    /// Fee amount in the denominating token's smallest unit.
    pub amount: i64,
    /// Token the fee is denominated in; `None` means hbar.
    pub denominating_token_id: Option<EntityId>,
}

impl FallbackFee {
    /// Create a validated fallback fee. The amount must be positive.
    pub fn new(
        amount: i64,
        denominating_token_id: Option<EntityId>,
    ) -> Result<Self, ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NotPositive {
                field: "amount",
                value: amount,
            });
        }
        Ok(Self {
            amount,
            denominating_token_id,
        })
    }
}

/// A royalty fee attached to a non-fungible token's custom fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyFee {
    /// Royalty fraction of the exchanged fungible value.
    pub amount: Fraction,
    /// Fixed fee charged when no fungible value is exchanged.
    pub fallback_fee: Option<FallbackFee>,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    #[serde(default)]
    pub all_collectors_are_exempt: bool,
}

impl RoyaltyFee {
    /// Create a validated royalty fee. The fraction numerator must be
    /// positive.
    pub fn new(
        amount: Fraction,
        fallback_fee: Option<FallbackFee>,
        collector_account_id: EntityId,
        all_collectors_are_exempt: bool,
    ) -> Result<Self, ValidationError> {
        if amount.numerator <= 0 {
            return Err(ValidationError::NotPositive {
                field: "numerator",
                value: amount.numerator,
            });
        }
        if amount.denominator == 0 {
            warn!(
                numerator = amount.numerator,
                "Royalty fee has a zero denominator"
            );
        }
        Ok(Self {
            amount,
            fallback_fee,
            collector_account_id: Some(collector_account_id),
            all_collectors_are_exempt,
        })
    }

    /// Marshal onto an SDK-style royalty fee builder.
    pub fn to_custom_royalty_fee(&self) -> CustomRoyaltyFee {
        debug!(amount = %self.amount, "Converting royalty fee to builder");
        let mut fee = CustomRoyaltyFee::new()
            .numerator(self.amount.numerator)
            .denominator(self.amount.denominator)
            .all_collectors_are_exempt(self.all_collectors_are_exempt);
        if let Some(fallback) = &self.fallback_fee {
            let mut fixed = CustomFixedFee::new().amount(fallback.amount);
            if let Some(token) = fallback.denominating_token_id {
                fixed = fixed.denominating_token_id(token);
            }
            fee = fee.fallback_fee(fixed);
        }
        if let Some(collector) = self.collector_account_id {
            fee = fee.collector_account_id(collector);
        }
        fee
    }
}

// ============================================================================
// Fee schedule
// ============================================================================

/// The custom fee schedule attached to a token, as the mirror node
/// returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFees {
    /// When the schedule was created.
    pub created_timestamp: Option<ConsensusTimestamp>,
    /// Fixed fees.
    #[serde(default)]
    pub fixed_fees: Vec<FixedFee>,
    /// Fractional fees (fungible tokens only).
    #[serde(default)]
    pub fractional_fees: Vec<FractionalFee>,
    /// Royalty fees (non-fungible tokens only).
    #[serde(default)]
    pub royalty_fees: Vec<RoyaltyFee>,
}

impl CustomFees {
    /// Whether the schedule carries no fees at all.
    pub fn is_empty(&self) -> bool {
        self.fixed_fees.is_empty()
            && self.fractional_fees.is_empty()
            && self.royalty_fees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector() -> EntityId {
        "0.0.789012".parse().unwrap()
    }

    fn token() -> EntityId {
        "0.0.123456".parse().unwrap()
    }

    // ─── FixedFee Tests ───

    #[test]
    fn test_fixed_fee_new() {
        let fee = FixedFee::new(10, Some(token()), collector(), false).unwrap();
        assert_eq!(fee.amount, 10);
        assert_eq!(fee.denominating_token_id, Some(token()));
        assert_eq!(fee.collector_account_id, Some(collector()));
        assert!(!fee.all_collectors_are_exempt);
    }

    #[test]
    fn test_fixed_fee_rejects_non_positive_amount() {
        let err = FixedFee::new(0, None, collector(), false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount: must be a positive integer");
        assert!(FixedFee::new(-10, None, collector(), false).is_err());
    }

    #[test]
    fn test_fixed_fee_stores_amount_unchanged() {
        let fee = FixedFee::new(1_000_000, None, collector(), false).unwrap();
        assert_eq!(fee.amount, 1_000_000);
    }

    #[test]
    fn test_fixed_fee_to_builder() {
        let fee = FixedFee::new(10, Some(token()), collector(), false).unwrap();
        let builder = fee.to_custom_fixed_fee();
        assert_eq!(builder.amount, 10);
        assert_eq!(builder.collector_account_id, Some(collector()));
        assert_eq!(builder.denominating_token_id, Some(token()));
        assert!(!builder.all_collectors_are_exempt);
    }

    #[test]
    fn test_fixed_fee_to_builder_skips_absent_token() {
        let fee = FixedFee::new(10, None, collector(), true).unwrap();
        let builder = fee.to_custom_fixed_fee();
        assert!(builder.denominating_token_id.is_none());
        assert!(builder.all_collectors_are_exempt);
    }

    #[test]
    fn test_fixed_fee_round_trip() {
        let a = FixedFee::new(10, Some(token()), collector(), false).unwrap();
        let b = FixedFee::new(
            a.amount,
            a.denominating_token_id,
            a.collector_account_id.unwrap(),
            a.all_collectors_are_exempt,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    // ─── FractionalFee Tests ───

    #[test]
    fn test_fractional_fee_new() {
        let fee = FractionalFee::new(
            Fraction::new(1, 10),
            Some(token()),
            1,
            Some(100),
            false,
            collector(),
            false,
        )
        .unwrap();
        assert_eq!(fee.amount, Fraction::new(1, 10));
        assert_eq!(fee.minimum, 1);
        assert_eq!(fee.maximum, Some(100));
    }

    #[test]
    fn test_fractional_fee_rejects_non_positive_numerator() {
        assert!(
            FractionalFee::new(Fraction::new(0, 10), None, 0, None, false, collector(), false)
                .is_err()
        );
        assert!(
            FractionalFee::new(Fraction::new(-1, 10), None, 0, None, false, collector(), false)
                .is_err()
        );
    }

    #[test]
    fn test_fractional_fee_zero_denominator_accepted() {
        // Division by zero is not validated at this layer.
        let fee = FractionalFee::new(
            Fraction::new(1, 0),
            None,
            0,
            None,
            false,
            collector(),
            false,
        )
        .unwrap();
        assert_eq!(fee.amount.denominator, 0);
    }

    #[test]
    fn test_fractional_fee_min_max_ordering_unchecked() {
        // minimum > maximum is not validated at this layer either.
        let fee = FractionalFee::new(
            Fraction::new(1, 10),
            None,
            100,
            Some(1),
            false,
            collector(),
            false,
        )
        .unwrap();
        assert_eq!(fee.minimum, 100);
        assert_eq!(fee.maximum, Some(1));
    }

    #[test]
    fn test_fractional_fee_to_builder() {
        let fee = FractionalFee::new(
            Fraction::new(1, 10),
            Some(token()),
            1,
            Some(100),
            true,
            collector(),
            false,
        )
        .unwrap();
        let builder = fee.to_custom_fractional_fee();
        assert_eq!(builder.numerator, 1);
        assert_eq!(builder.denominator, 10);
        assert_eq!(builder.minimum, 1);
        assert_eq!(builder.maximum, Some(100));
        assert_eq!(builder.assessment_method, FeeAssessmentMethod::Exclusive);
        assert_eq!(builder.collector_account_id, Some(collector()));
    }

    #[test]
    fn test_fractional_fee_gross_assessment() {
        let fee = FractionalFee::new(
            Fraction::new(1, 10),
            None,
            0,
            None,
            false,
            collector(),
            false,
        )
        .unwrap();
        assert_eq!(
            fee.to_custom_fractional_fee().assessment_method,
            FeeAssessmentMethod::Inclusive
        );
    }

    // ─── RoyaltyFee Tests ───

    #[test]
    fn test_royalty_fee_new() {
        let fallback = FallbackFee::new(5, None).unwrap();
        let fee = RoyaltyFee::new(Fraction::new(1, 20), Some(fallback), collector(), false)
            .unwrap();
        assert_eq!(fee.amount, Fraction::new(1, 20));
        assert!(fee.fallback_fee.is_some());
    }

    #[test]
    fn test_fallback_fee_rejects_non_positive_amount() {
        let err = FallbackFee::new(0, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount: must be a positive integer");
    }

    #[test]
    fn test_royalty_fee_to_builder() {
        let fallback = FallbackFee::new(5, Some(token())).unwrap();
        let fee = RoyaltyFee::new(Fraction::new(1, 20), Some(fallback), collector(), false)
            .unwrap();
        let builder = fee.to_custom_royalty_fee();
        assert_eq!(builder.numerator, 1);
        assert_eq!(builder.denominator, 20);
        assert_eq!(builder.collector_account_id, Some(collector()));
        let fixed = builder.fallback_fee.unwrap();
        assert_eq!(fixed.amount, 5);
        assert_eq!(fixed.denominating_token_id, Some(token()));
    }

    #[test]
    fn test_royalty_fee_without_fallback() {
        let fee = RoyaltyFee::new(Fraction::new(1, 20), None, collector(), false).unwrap();
        assert!(fee.to_custom_royalty_fee().fallback_fee.is_none());
    }

    // ─── CustomFees Tests ───

    #[test]
    fn test_custom_fees_deserialize() {
        let json = serde_json::json!({
            "created_timestamp": "1234567890.000000001",
            "fixed_fees": [
                {
                    "amount": 10,
                    "collector_account_id": "0.0.789012",
                    "denominating_token_id": "0.0.123456",
                    "all_collectors_are_exempt": false
                }
            ],
            "fractional_fees": [
                {
                    "amount": {"numerator": 1, "denominator": 10},
                    "collector_account_id": "0.0.789012",
                    "denominating_token_id": "0.0.123456",
                    "maximum": 100,
                    "minimum": 1,
                    "net_of_transfers": false,
                    "all_collectors_are_exempt": false
                }
            ]
        });
        let fees: CustomFees = serde_json::from_value(json).unwrap();
        assert_eq!(fees.fixed_fees.len(), 1);
        assert_eq!(fees.fractional_fees.len(), 1);
        assert!(fees.royalty_fees.is_empty());
        assert!(!fees.is_empty());
        assert_eq!(fees.fixed_fees[0].amount, 10);
        assert_eq!(fees.fractional_fees[0].amount, Fraction::new(1, 10));
    }

    #[test]
    fn test_custom_fees_default_is_empty() {
        assert!(CustomFees::default().is_empty());
    }
}
