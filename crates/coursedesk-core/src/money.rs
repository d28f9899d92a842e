//! # Money Module
//!
//! Provides the `Money` type for monetary values and `Rate` for percentages.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a quotation with many rows in binary floating point:          │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Line totals and subtotals are exact sums of integers.               │
//! │    Rounding happens only where a Rate is applied (tax, cost ratios).   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! In memory a `Money` is an `i64` count of paise. On the wire and in the
//! JSON data files it is a decimal number of rupees (`1250.5`), which is
//! what the browser forms submit.
//!
//! ## Range
//! Amounts read from input are limited to [`Money::MAX`] in magnitude
//! (₹10 trillion). `checked_*` methods report results beyond that bound as
//! `None`; the operators saturate instead of panicking or wrapping.
//!
//! ## Usage
//! ```rust
//! use coursedesk_core::money::{Money, Rate};
//!
//! let price = Money::from_paise(10_000); // ₹100.00
//! let line_total = price * 2;            // ₹200.00
//! let gst = line_total.apply_rate(Rate::from_bps(1800));
//! assert_eq!(gst.paise(), 3_600);        // ₹36.00
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

/// Currency symbol used when displaying amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_cost ──► line_total ──► subtotal ──► GST ──► total      │
/// │                              │                                          │
/// │                              └──► estimated cost ──► profit            │
/// │                                                                         │
/// │  Trainer.daily_rate ──► TrainerPo.total_amount                         │
/// │  Training.costs / prices ──► monthly revenue / profit                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from input: ₹10 trillion.
    ///
    /// Line totals, subtotals and day-rate totals stay within this bound, so
    /// tax and profit derived from them fit comfortably in an `i64`.
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ```rust
    /// use coursedesk_core::money::Money;
    ///
    /// let fee = Money::from_paise(125_050); // ₹1250.50
    /// assert_eq!(fee.paise(), 125_050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees, saturating at the `i64` limits.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees.saturating_mul(100))
    }

    /// Creates a Money value from whole rupees; `None` beyond [`Money::MAX`].
    pub fn try_from_rupees(rupees: i64) -> Option<Self> {
        rupees.checked_mul(100).map(Money).filter(Money::is_in_range)
    }

    /// Converts a decimal rupee amount into paise, rounding to the nearest paisa.
    ///
    /// Returns `None` for NaN and infinities, which is how non-numeric form
    /// input reaches the core, and for amounts beyond [`Money::MAX`].
    ///
    /// ```rust
    /// use coursedesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(1250.5), Some(Money::from_paise(125_050)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// assert_eq!(Money::from_decimal(1.0e14), None);
    /// ```
    pub fn from_decimal(rupees: f64) -> Option<Self> {
        let paise = (rupees * 100.0).round();
        if !paise.is_finite() || paise.abs() > Money::MAX.0 as f64 {
            return None;
        }
        Some(Money(paise as i64))
    }

    /// Parses a decimal rupee string such as `"1250.50"`.
    ///
    /// Surrounding whitespace is ignored. Empty and non-numeric strings
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Money::from_decimal)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("'{}' is not a number", trimmed),
            })
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount as a decimal rupee value (display and wire only).
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks that the magnitude does not exceed [`Money::MAX`].
    #[inline]
    pub const fn is_in_range(&self) -> bool {
        self.0.unsigned_abs() <= Money::MAX.0.unsigned_abs()
    }

    /// Multiplies money by a quantity, saturating at the `i64` limits.
    ///
    /// ```rust
    /// use coursedesk_core::money::Money;
    ///
    /// let per_pax = Money::from_rupees(100);
    /// assert_eq!(per_pax.multiply_quantity(2), Money::from_rupees(200));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity; `None` when the product leaves the
    /// [`Money::MAX`] range.
    ///
    /// ```rust
    /// use coursedesk_core::money::Money;
    ///
    /// let fee = Money::from_rupees(1_000_000_000_000);
    /// assert_eq!(fee.checked_mul_quantity(2), Some(Money::from_rupees(2_000_000_000_000)));
    /// assert_eq!(fee.checked_mul_quantity(10_000_000_000), None);
    /// ```
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money).filter(Money::is_in_range)
    }

    /// Adds two amounts; `None` when the sum leaves the [`Money::MAX`] range.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money).filter(Money::is_in_range)
    }

    /// Applies a rate (tax or cost ratio) and rounds half-up to the paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, widened to i128 so
    /// large amounts cannot overflow. Negative amounts round symmetrically.
    ///
    /// ```rust
    /// use coursedesk_core::money::{Money, Rate};
    ///
    /// // ₹10.05 at 18% = ₹1.809 → ₹1.81
    /// let tax = Money::from_paise(1_005).apply_rate(Rate::from_bps(1800));
    /// assert_eq!(tax.paise(), 181);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        let rounded = if product >= 0 {
            (product + 5_000) / 10_000
        } else {
            (product - 5_000) / 10_000
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Expresses `self` as a percentage of `base`.
    ///
    /// Returns `None` when `base` is zero instead of producing NaN or infinity.
    pub fn percent_of(&self, base: Money) -> Option<f64> {
        if base.is_zero() {
            return None;
        }
        Some(self.0 as f64 / base.0 as f64 * 100.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `₹1234.50`. No digit grouping or locale handling.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde: decimal rupees on the wire
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal rupee amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Money::try_from_rupees(v).ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(Money::try_from_rupees)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v).ok_or_else(|| E::custom("amount is not a finite number"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A rate in basis points (1 bps = 0.01%).
///
/// Used for the GST rate (1800 bps = 18%) and the cost ratios of the
/// profit analysis (5500 bps = 55% of price).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise_parts() {
        let money = Money::from_paise(125_050);
        assert_eq!(money.paise(), 125_050);
        assert_eq!(money.rupees(), 1250);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(23_600).to_string(), "₹236.00");
        assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paise(), 1_500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3_000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_rupees(20));
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // ₹200.00 at 18% = ₹36.00
        assert_eq!(Money::from_rupees(200).apply_rate(Rate::from_bps(1800)).paise(), 3_600);
        // 25 paise at 18% = 4.5 paise → 5
        assert_eq!(Money::from_paise(25).apply_rate(Rate::from_bps(1800)).paise(), 5);
        // negative amounts round away from zero symmetrically
        assert_eq!(Money::from_paise(-25).apply_rate(Rate::from_bps(1800)).paise(), -5);
    }

    #[test]
    fn test_percent_of_zero_base_is_none() {
        assert_eq!(Money::from_rupees(10).percent_of(Money::zero()), None);
        assert_eq!(Money::from_rupees(25).percent_of(Money::from_rupees(100)), Some(25.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1250.50").unwrap().paise(), 125_050);
        assert_eq!(Money::parse(" 7 ").unwrap().paise(), 700);
        assert_eq!(Money::parse("0.005").unwrap().paise(), 1);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_serde_uses_decimal_rupees() {
        let json = serde_json::to_string(&Money::from_paise(125_050)).unwrap();
        assert_eq!(json, "1250.5");

        let from_float: Money = serde_json::from_str("1250.5").unwrap();
        let from_int: Money = serde_json::from_str("42").unwrap();
        let from_str: Money = serde_json::from_str("\"99.99\"").unwrap();
        assert_eq!(from_float.paise(), 125_050);
        assert_eq!(from_int.paise(), 4_200);
        assert_eq!(from_str.paise(), 9_999);

        assert!(serde_json::from_str::<Money>("\"n/a\"").is_err());
    }

    #[test]
    fn test_checked_arithmetic_respects_max() {
        let big = Money::from_rupees(1_000_000_000_000);

        assert_eq!(big.checked_mul_quantity(10), Some(Money::MAX));
        assert_eq!(big.checked_mul_quantity(11), None);
        assert_eq!(big.checked_mul_quantity(10_000_000_000), None);
        assert_eq!(Money::MAX.checked_add(Money::from_paise(1)), None);
        assert_eq!(
            Money::from_rupees(1).checked_add(Money::from_rupees(2)),
            Some(Money::from_rupees(3))
        );
    }

    #[test]
    fn test_operators_saturate() {
        let huge = Money::from_paise(i64::MAX);

        assert_eq!(huge + huge, huge);
        assert_eq!(huge * 3, huge);
        assert_eq!(Money::from_paise(i64::MIN) - huge, Money::from_paise(i64::MIN));
        assert_eq!(Money::from_rupees(i64::MAX), huge);

        let tax = huge.apply_rate(Rate::from_bps(u32::MAX));
        assert_eq!(tax, huge);
    }

    #[test]
    fn test_out_of_range_input_is_rejected() {
        assert_eq!(Money::from_decimal(1.0e12), Some(Money::from_paise(100_000_000_000_000)));
        assert_eq!(Money::from_decimal(1.0e14), None);
        assert_eq!(Money::from_decimal(-1.0e14), None);
        assert_eq!(Money::from_decimal(1.0e13), Some(Money::MAX));
        assert!(Money::parse("1e30").is_err());

        assert!(serde_json::from_str::<Money>("92233720368547758").is_err());
        assert!(serde_json::from_str::<Money>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Money>("10000000000000").is_ok());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_bps(1800).to_string(), "18%");
        assert_eq!(Rate::from_bps(5500).percentage(), 55.0);
    }
}
