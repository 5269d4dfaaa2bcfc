//! SDK-style custom fee builders.
//!
//! These are the marshalling targets for the validated fee models: plain
//! builder objects whose fields map 1:1 onto an SDK's transaction-building
//! surface. Construction is fluent and infallible; validation happens in
//! the fee models before conversion.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::EntityId;

/// How a fractional fee is assessed against a transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeAssessmentMethod {
    /// The fee is taken out of the transferred amount.
    #[default]
    Inclusive,
    /// The fee is charged on top of the transferred amount.
    Exclusive,
}

impl FeeAssessmentMethod {
    /// Get the wire string for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeAssessmentMethod::Inclusive => "INCLUSIVE",
            FeeAssessmentMethod::Exclusive => "EXCLUSIVE",
        }
    }
}

impl FromStr for FeeAssessmentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCLUSIVE" => Ok(FeeAssessmentMethod::Inclusive),
            "EXCLUSIVE" => Ok(FeeAssessmentMethod::Exclusive),
            other => Err(ValidationError::UnknownEnumValue {
                field: "assessment_method",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for FeeAssessmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builder for a fixed custom fee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFixedFee {
    /// Fee amount in the denominating token's smallest unit.
    pub amount: i64,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Token the fee is denominated in; unset means hbar.
    pub denominating_token_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    pub all_collectors_are_exempt: bool,
}

impl CustomFixedFee {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fee amount.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Set the collecting account.
    pub fn collector_account_id(mut self, collector: EntityId) -> Self {
        self.collector_account_id = Some(collector);
        self
    }

    /// Set the denominating token.
    pub fn denominating_token_id(mut self, token: EntityId) -> Self {
        self.denominating_token_id = Some(token);
        self
    }

    /// Set whether fee collectors are exempt.
    pub fn all_collectors_are_exempt(mut self, exempt: bool) -> Self {
        self.all_collectors_are_exempt = exempt;
        self
    }
}

/// Builder for a fractional custom fee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFractionalFee {
    /// Fraction numerator.
    pub numerator: i64,
    /// Fraction denominator.
    pub denominator: i64,
    /// Minimum assessed amount.
    pub minimum: i64,
    /// Maximum assessed amount, if bounded.
    pub maximum: Option<i64>,
    /// How the fee is assessed.
    pub assessment_method: FeeAssessmentMethod,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    pub all_collectors_are_exempt: bool,
}

impl CustomFractionalFee {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction numerator.
    pub fn numerator(mut self, numerator: i64) -> Self {
        self.numerator = numerator;
        self
    }

    /// Set the fraction denominator.
    pub fn denominator(mut self, denominator: i64) -> Self {
        self.denominator = denominator;
        self
    }

    /// Set the minimum assessed amount.
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Set the maximum assessed amount.
    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the assessment method.
    pub fn assessment_method(mut self, method: FeeAssessmentMethod) -> Self {
        self.assessment_method = method;
        self
    }

    /// Set the collecting account.
    pub fn collector_account_id(mut self, collector: EntityId) -> Self {
        self.collector_account_id = Some(collector);
        self
    }

    /// Set whether fee collectors are exempt.
    pub fn all_collectors_are_exempt(mut self, exempt: bool) -> Self {
        self.all_collectors_are_exempt = exempt;
        self
    }
}

/// Builder for a royalty custom fee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomRoyaltyFee {
    /// Fraction numerator.
    pub numerator: i64,
    /// Fraction denominator.
    pub denominator: i64,
    /// Fixed fee charged when the exchanged value is not fungible.
    pub fallback_fee: Option<CustomFixedFee>,
    /// Account collecting the fee.
    pub collector_account_id: Option<EntityId>,
    /// Whether fee collectors are exempt from this fee.
    pub all_collectors_are_exempt: bool,
}

impl CustomRoyaltyFee {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction numerator.
    pub fn numerator(mut self, numerator: i64) -> Self {
        self.numerator = numerator;
        self
    }

    /// Set the fraction denominator.
    pub fn denominator(mut self, denominator: i64) -> Self {
        self.denominator = denominator;
        self
    }

    /// Set the fallback fixed fee.
    pub fn fallback_fee(mut self, fallback: CustomFixedFee) -> Self {
        self.fallback_fee = Some(fallback);
        self
    }

    /// Set the collecting account.
    pub fn collector_account_id(mut self, collector: EntityId) -> Self {
        self.collector_account_id = Some(collector);
        self
    }

    /// Set whether fee collectors are exempt.
    pub fn all_collectors_are_exempt(mut self, exempt: bool) -> Self {
        self.all_collectors_are_exempt = exempt;
        self
    }
}
