//! # Money Module
//!
//! Provides the `Money` type for medicine prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Stored as a double:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "2.5" on disk  ──► 250 cents in memory ──► "2.50" back on disk      │
//! │    Two-decimal prices read back exactly as they were written           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharmacy_core::money::Money;
//!
//! let price = Money::parse_decimal("7.25").unwrap();
//! assert_eq!(price.cents(), 725);
//! assert_eq!(price.to_decimal_string(), "7.25");
//!
//! let stock_value = price.checked_mul_quantity(20).unwrap();
//! assert_eq!(stock_value.to_string(), "$145.00");
//!
//! // Files written by older tools may hold `1.0E7` or `2.555`
//! assert_eq!(Money::parse_stored("1.0E7").unwrap().cents(), 1_000_000_000);
//! assert_eq!(Money::parse_stored("2.555").unwrap().cents(), 256);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::MoneyParseError;

/// Longest digit run the parser handles; 10^38 still fits in a u128.
const MAX_DIGITS: usize = 38;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: prices are non-negative by convention only, so a
///   negative value read from a file must survive a save
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Checked arithmetic only**: totals over loaded records return
///   `None` on overflow instead of panicking
/// - **Text form**: decimal with exactly two places (`2.50`), see
///   [`Money::to_decimal_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses decimal text typed by a person, such as `2.5`, `7.25` or `12`.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - One optional leading sign (`-` or `+`)
    /// - Digits with at most one `.`; either side of it may be empty,
    ///   but not both
    /// - At most two significant decimal places (`2.500` is fine,
    ///   `2.555` is [`MoneyParseError::TooPrecise`])
    /// - No exponent
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
    /// assert_eq!(Money::parse_decimal("-1.10").unwrap().cents(), -110);
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Money, MoneyParseError> {
        parse_amount(text, Notation::Strict)
    }

    /// Parses a price read back from a record file.
    ///
    /// Accepts everything [`Money::parse_decimal`] does, plus the forms a
    /// double-precision writer produces:
    /// - Exponent notation: `1.0E7`, `2.5e-1`
    /// - Extra decimal places, rounded to the nearest cent with halves
    ///   rounded away from zero (`2.555` → `2.56`, `-2.555` → `-2.56`)
    pub fn parse_stored(text: &str) -> Result<Money, MoneyParseError> {
        parse_amount(text, Notation::Stored)
    }

    /// Returns the canonical decimal text written to record files.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).to_decimal_string(), "2.50");
    /// assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    /// Plain decimal, exact to the cent.
    Strict,
    /// Plain or exponent notation, rounded to the cent.
    Stored,
}

fn parse_amount(text: &str, notation: Notation) -> Result<Money, MoneyParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (decimal, exponent) = match (notation, unsigned.split_once(['e', 'E'])) {
        (Notation::Stored, Some((decimal, exponent))) => {
            let exponent: i64 = exponent
                .parse()
                .map_err(|_| MoneyParseError::InvalidCharacter)?;
            (decimal, exponent)
        }
        _ => (unsigned, 0),
    };

    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(MoneyParseError::InvalidCharacter);
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidCharacter);
    }

    // value = digits × 10^scale cents
    let digits = format!("{}{}", whole, frac);
    let digits = digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    let scale = exponent
        .saturating_add(2)
        .saturating_sub(frac.len() as i64)
        .saturating_add((digits.len() - significant.len()) as i64);

    if significant.is_empty() {
        return Ok(Money::zero());
    }
    if significant.len() > MAX_DIGITS {
        return Err(MoneyParseError::Overflow);
    }

    let mantissa: u128 = significant
        .parse()
        .map_err(|_| MoneyParseError::Overflow)?;

    let cents = if scale >= 0 {
        u32::try_from(scale)
            .ok()
            .and_then(|s| 10u128.checked_pow(s))
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or(MoneyParseError::Overflow)?
    } else {
        if notation == Notation::Strict {
            return Err(MoneyParseError::TooPrecise);
        }
        round_half_away(mantissa, scale.unsigned_abs())
    };

    let cents = i64::try_from(cents).map_err(|_| MoneyParseError::Overflow)?;
    Ok(Money(if negative { -cents } else { cents }))
}

/// `mantissa / 10^places`, halves rounded up.
fn round_half_away(mantissa: u128, places: u64) -> u128 {
    let divisor = match u32::try_from(places).ok().and_then(|p| 10u128.checked_pow(p)) {
        Some(divisor) => divisor,
        // mantissa < 10^38, so it's under half of any larger divisor
        None => return 0,
    };

    let (quotient, remainder) = (mantissa / divisor, mantissa % divisor);
    if remainder >= divisor - remainder {
        quotient + 1
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way a price column does (`$2.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert!(!money.is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_parse_decimal_accepts_price_text() {
        assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
        assert_eq!(Money::parse_decimal("7.25").unwrap().cents(), 725);
        assert_eq!(Money::parse_decimal("5.0").unwrap().cents(), 500);
        assert_eq!(Money::parse_decimal("12").unwrap().cents(), 1200);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("3.").unwrap().cents(), 300);
        assert_eq!(Money::parse_decimal(" 1.99 ").unwrap().cents(), 199);
        assert_eq!(Money::parse_decimal("+4.10").unwrap().cents(), 410);
        assert_eq!(Money::parse_decimal("-1.10").unwrap().cents(), -110);
        assert_eq!(Money::parse_decimal("2.500").unwrap().cents(), 250);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse_decimal("   "), Err(MoneyParseError::Empty));
        assert_eq!(
            Money::parse_decimal("abc"),
            Err(MoneyParseError::InvalidCharacter)
        );
        assert_eq!(
            Money::parse_decimal("1.2.3"),
            Err(MoneyParseError::InvalidCharacter)
        );
        assert_eq!(Money::parse_decimal("."), Err(MoneyParseError::InvalidCharacter));
        assert_eq!(Money::parse_decimal("-"), Err(MoneyParseError::InvalidCharacter));
        assert_eq!(
            Money::parse_decimal("1e5"),
            Err(MoneyParseError::InvalidCharacter)
        );
        assert_eq!(Money::parse_decimal("2.555"), Err(MoneyParseError::TooPrecise));
        assert_eq!(
            Money::parse_decimal("99999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(250).to_decimal_string(), "2.50");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
        assert_eq!(Money::from_cents(123456).to_decimal_string(), "1234.56");
    }

    #[test]
    fn test_decimal_string_parses_back() {
        for cents in [0, 1, 99, 250, 725, -110, -5, 1_000_000] {
            let money = Money::from_cents(cents);
            assert_eq!(Money::parse_decimal(&money.to_decimal_string()), Ok(money));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-50)), "-$0.50");
    }

    #[test]
    fn test_parse_stored_accepts_double_text() {
        assert_eq!(Money::parse_stored("1.0E7").unwrap().cents(), 1_000_000_000);
        assert_eq!(Money::parse_stored("1.25E2").unwrap().cents(), 12_500);
        assert_eq!(Money::parse_stored("2.5e-1").unwrap().cents(), 25);
        assert_eq!(Money::parse_stored("-3.0E1").unwrap().cents(), -3_000);
        assert_eq!(Money::parse_stored("5.0").unwrap().cents(), 500);
        assert_eq!(Money::parse_stored("0.0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_stored_rounds_to_cents() {
        assert_eq!(Money::parse_stored("2.555").unwrap().cents(), 256);
        assert_eq!(Money::parse_stored("2.554").unwrap().cents(), 255);
        assert_eq!(Money::parse_stored("-2.555").unwrap().cents(), -256);
        assert_eq!(Money::parse_stored("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse_stored("1.0E-50").unwrap().cents(), 0);
        assert_eq!(Money::parse_stored("19.999999999999996").unwrap().cents(), 2000);
    }

    #[test]
    fn test_parse_stored_rejects_garbage() {
        assert_eq!(Money::parse_stored("1.0E"), Err(MoneyParseError::InvalidCharacter));
        assert_eq!(Money::parse_stored("E5"), Err(MoneyParseError::InvalidCharacter));
        assert_eq!(Money::parse_stored("NaN"), Err(MoneyParseError::InvalidCharacter));
        assert_eq!(Money::parse_stored("1.0E300"), Err(MoneyParseError::Overflow));
        assert_eq!(Money::parse_stored("1.0E17"), Err(MoneyParseError::Overflow));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_cents(3000)));
        assert_eq!(a.checked_mul_quantity(-2), Some(Money::from_cents(-2000)));

        let huge = Money::from_cents(10_000_000_000_000_000);
        assert_eq!(huge.checked_mul_quantity(1_000_000), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(725)).unwrap();
        assert_eq!(json, "725");
    }
}
