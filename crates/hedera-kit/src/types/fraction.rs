//! Fixed-point fraction type.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A fixed-point fraction used for percentage-based fees.
///
/// Fee percentages cross the wire as a `{numerator, denominator}` pair
/// rather than floating point, to avoid rounding error.
///
/// Note: a zero denominator is not rejected at this layer. The ledger owns
/// that rule; fee constructors log a warning when they see one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Create a new fraction.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
