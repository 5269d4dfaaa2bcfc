//! Custom fee models and their SDK-style builder targets.

mod custom;
mod types;

pub use custom::{CustomFixedFee, CustomFractionalFee, CustomRoyaltyFee, FeeAssessmentMethod};
pub use types::{CustomFees, FallbackFee, FixedFee, FractionalFee, RoyaltyFee};
