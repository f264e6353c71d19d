//! # Money Module
//!
//! Provides the `Money` type and the `round2` rounding rule used by every
//! price computation in Shopfront.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    25.005 rounds to 25.00 because it is stored as 25.00499999...       │
//! │                                                                         │
//! │  Integer cents cannot hold catalog prices like $5.005 either.           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic, rounded to 2 places at every step          │
//! │    25.005 → round2 → 25.01 (half-up, deterministic)                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Checked arithmetic: `None` instead of a panic on overflow
//! let doubled = price.checked_multiply_quantity(2).unwrap();          // $21.98
//! let total = doubled.checked_add(Money::from_cents(500)).unwrap();   // $26.98
//! assert_eq!(total.to_string(), "$26.98");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::TaxRate;

/// Number of fractional digits every price is normalized to.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a decimal value to exactly two fractional digits.
///
/// ## Rounding Rule: Half-Up
/// Midpoints round away from zero: `25.005 → 25.01`, `3.7515 → 3.75`,
/// `0.125 → 0.13`. Prices are never negative in the pricing path, so this
/// behaves as classic half-up rounding.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use shopfront_core::money::round2;
///
/// let value: Decimal = "25.005".parse().unwrap();
/// assert_eq!(round2(value).to_string(), "25.01");
/// ```
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Keep "12.9" as "12.90" so serialized prices always carry two digits
    rounded.rescale(MONEY_SCALE);
    rounded
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the store currency's standard unit (dollars, not cents).
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact, allows sub-cent catalog prices before rounding
/// - **Single field tuple struct**: zero-cost wrapper, serializes as the bare
///   decimal string (`"12.90"`)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_price ──► × quantity ──► Σ ──► round2 ──► items_price     │
/// │                                                            │            │
/// │  DeliveryOption.shipping_price ─────────────────► shipping_price        │
/// │                                                            │            │
/// │  items_price × 15% ──► round2 ──────────────────► tax_price             │
/// │                                                            │            │
/// │                                          round2(Σ) ──► total_price      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps a decimal amount without rounding it.
    ///
    /// Unit prices keep their full precision; only computed totals go
    /// through [`Money::round2`].
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns this value rounded to two decimal places (see [`round2`]).
    #[inline]
    pub fn round2(&self) -> Self {
        Money(round2(self.0))
    }

    /// Multiplies money by a quantity. The result is not rounded.
    ///
    /// Returns `None` when the product does not fit in a `Decimal`.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.checked_multiply_quantity(3);
    /// assert_eq!(line_total, Some(Money::from_cents(897))); // $8.97
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates tax on this amount, rounded half-up to two places.
    ///
    /// Returns `None` when the amount is too large to tax.
    ///
    /// ## Implementation
    /// `round2(amount × bps / 10000)`, exact in decimal before the final
    /// rounding step.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::TaxRate;
    ///
    /// let items = Money::from_cents(2501);    // $25.01
    /// let rate = TaxRate::from_bps(1500);     // 15%
    ///
    /// // $25.01 × 15% = $3.7515 → $3.75
    /// assert_eq!(items.calculate_tax(rate), Some(Money::from_cents(375)));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        let tax = self
            .0
            .checked_mul(Decimal::from(rate.bps()))?
            .checked_div(Decimal::from(10_000u32))?;
        Some(Money(round2(tax)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and the CLI table. The checkout frontend does its own
/// localized formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, round2(self.0.abs()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
