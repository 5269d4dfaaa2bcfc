//! Hbar amount type with tinybar precision.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseHbarError;

/// One hbar in tinybars (10^8).
const TINYBAR_PER_HBAR: u64 = 100_000_000;
/// One millihbar in tinybars (10^5).
const TINYBAR_PER_MILLIHBAR: u64 = 100_000;

/// An hbar amount with tinybar precision (10^-8 hbar).
///
/// Mirror-node balances are plain JSON integers of tinybars, so this type
/// serializes transparently as a number.
///
/// # Creating Amounts
///
/// Use the typed constructors for compile-time safety:
///
/// ```
/// use hedera_kit::Hbar;
///
/// let five = Hbar::hbar(5);
/// let half = Hbar::millihbar(500);
/// let one_tinybar = Hbar::tinybar(1);
///
/// assert_eq!(five, Hbar::from_hbar(5));
/// ```
///
/// # Parsing from Strings
///
/// String parsing is available for runtime input (CLI, config files):
/// - `"5 hbar"` or `"1.5 hbar"` - whole or decimal hbar
/// - `"500 millihbar"` or `"500 mhbar"` - millihbar
/// - `"100 tinybar"` - tinybar
///
/// Raw numbers are NOT accepted to prevent unit confusion.
///
/// ```
/// use hedera_kit::Hbar;
///
/// let amount: Hbar = "1.5 hbar".parse().unwrap();
/// assert_eq!(amount.as_tinybar(), 150_000_000);
/// assert!("123".parse::<Hbar>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hbar(u64);

impl Hbar {
    /// Zero hbar.
    pub const ZERO: Self = Self(0);
    /// One tinybar.
    pub const ONE_TINYBAR: Self = Self(1);
    /// One millihbar.
    pub const ONE_MILLIHBAR: Self = Self(TINYBAR_PER_MILLIHBAR);
    /// One hbar.
    pub const ONE_HBAR: Self = Self(TINYBAR_PER_HBAR);

    // ========================================================================
    // Short alias constructors (preferred)
    // ========================================================================

    /// Create from whole hbar (short alias for `from_hbar`).
    pub const fn hbar(hbar: u64) -> Self {
        Self(hbar * TINYBAR_PER_HBAR)
    }

    /// Create from millihbar (short alias for `from_millihbar`).
    pub const fn millihbar(millihbar: u64) -> Self {
        Self(millihbar * TINYBAR_PER_MILLIHBAR)
    }

    /// Create from tinybars (short alias for `from_tinybar`).
    pub const fn tinybar(tinybar: u64) -> Self {
        Self(tinybar)
    }

    // ========================================================================
    // Full-name constructors
    // ========================================================================

    /// Create from tinybars (10^-8 hbar).
    pub const fn from_tinybar(tinybar: u64) -> Self {
        Self(tinybar)
    }

    /// Create from millihbar (10^-3 hbar).
    pub const fn from_millihbar(millihbar: u64) -> Self {
        Self(millihbar * TINYBAR_PER_MILLIHBAR)
    }

    /// Create from whole hbar.
    pub const fn from_hbar(hbar: u64) -> Self {
        Self(hbar * TINYBAR_PER_HBAR)
    }

    /// Parse from decimal hbar (e.g., `"1.5"`).
    pub fn from_hbar_decimal(s: &str) -> Result<Self, ParseHbarError> {
        let s = s.trim();

        let Some((whole_str, frac_str)) = s.split_once('.') else {
            // No decimal point - whole hbar
            let whole: u64 = s
                .parse()
                .map_err(|_| ParseHbarError::InvalidNumber(s.to_string()))?;
            return whole
                .checked_mul(TINYBAR_PER_HBAR)
                .map(Self)
                .ok_or(ParseHbarError::Overflow);
        };

        let whole: u64 = if whole_str.is_empty() {
            0
        } else {
            whole_str
                .parse()
                .map_err(|_| ParseHbarError::InvalidNumber(s.to_string()))?
        };

        if frac_str.is_empty() || frac_str.len() > 8 {
            return Err(ParseHbarError::InvalidFormat(s.to_string()));
        }

        // Pad fractional part to 8 digits of tinybars
        let padded = format!("{:0<8}", frac_str);
        let frac: u64 = padded
            .parse()
            .map_err(|_| ParseHbarError::InvalidNumber(s.to_string()))?;

        whole
            .checked_mul(TINYBAR_PER_HBAR)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or(ParseHbarError::Overflow)
    }

    // ========================================================================
    // Accessors and arithmetic
    // ========================================================================

    /// The amount in tinybars.
    pub const fn as_tinybar(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Hbar) -> Option<Hbar> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Hbar) -> Option<Hbar> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Hbar) -> Hbar {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction (clamps at zero).
    pub fn saturating_sub(self, other: Hbar) -> Hbar {
        Self(self.0.saturating_sub(other.0))
    }
}

impl FromStr for Hbar {
    type Err = ParseHbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ParseHbarError::InvalidFormat(s.to_string()));
        }

        let Some((number, unit)) = s.split_once(char::is_whitespace) else {
            // A bare number is ambiguous: tinybars or hbar?
            return Err(ParseHbarError::AmbiguousAmount(s.to_string()));
        };

        let number = number.trim();
        match unit.trim().to_ascii_lowercase().as_str() {
            "hbar" | "ℏ" => Self::from_hbar_decimal(number),
            "millihbar" | "mhbar" => {
                let n: u64 = number
                    .parse()
                    .map_err(|_| ParseHbarError::InvalidNumber(number.to_string()))?;
                n.checked_mul(TINYBAR_PER_MILLIHBAR)
                    .map(Self)
                    .ok_or(ParseHbarError::Overflow)
            }
            "tinybar" => {
                let n: u64 = number
                    .parse()
                    .map_err(|_| ParseHbarError::InvalidNumber(number.to_string()))?;
                Ok(Self(n))
            }
            _ => Err(ParseHbarError::InvalidFormat(s.to_string())),
        }
    }
}

impl Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / TINYBAR_PER_HBAR;
        let frac = self.0 % TINYBAR_PER_HBAR;

        if frac == 0 {
            write!(f, "{} hbar", whole)
        } else {
            let frac_str = format!("{:08}", frac);
            write!(f, "{}.{} hbar", whole, frac_str.trim_end_matches('0'))
        }
    }
}

impl From<Hbar> for u64 {
    fn from(amount: Hbar) -> u64 {
        amount.0
    }
}
