//! # Delivery Options
//!
//! The shipping tiers a customer can pick at checkout.
//!
//! ## Table Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index │ name          │ days │ shipping │ free shipping from           │
//! │  ──────┼───────────────┼──────┼──────────┼────────────────────────────  │
//! │    0   │ Tomorrow      │  1   │  $12.90  │ never (0 = disabled)         │
//! │    1   │ Next 3 Days   │  3   │   $6.90  │ never                        │
//! │    2   │ Next 5 Days   │  5   │   $4.90  │ $35.00  ◄── default (last)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index is the selection key sent by checkout. When checkout sends no
//! index, the LAST option is used. The table is immutable once built and is
//! passed to the calculator explicitly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_delivery_option;

// =============================================================================
// Delivery Option
// =============================================================================

/// A configured shipping tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    /// Label shown next to the radio button ("Next 3 Days").
    pub name: String,

    /// Lead time in days.
    pub days_to_deliver: u32,

    /// Flat shipping charge for this tier.
    pub shipping_price: Money,

    /// Items subtotal from which shipping becomes free. Zero disables the rule.
    pub free_shipping_min_price: Money,
}

impl DeliveryOption {
    pub fn new(
        name: impl Into<String>,
        days_to_deliver: u32,
        shipping_price: Money,
        free_shipping_min_price: Money,
    ) -> Self {
        DeliveryOption {
            name: name.into(),
            days_to_deliver,
            shipping_price,
            free_shipping_min_price,
        }
    }

    /// Whether an order with this items subtotal ships for free.
    ///
    /// ## Rule
    /// `free_shipping_min_price > 0 && items_price >= free_shipping_min_price`
    pub fn qualifies_for_free_shipping(&self, items_price: Money) -> bool {
        self.free_shipping_min_price.is_positive() && items_price >= self.free_shipping_min_price
    }

    /// Shipping charge for an order with the given items subtotal.
    pub fn shipping_for(&self, items_price: Money) -> Money {
        if self.qualifies_for_free_shipping(items_price) {
            Money::zero()
        } else {
            self.shipping_price
        }
    }

    /// Date the order arrives when placed at `from`.
    ///
    /// `None` when the date falls outside chrono's range.
    pub fn expected_delivery(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        from.checked_add_signed(Duration::days(i64::from(self.days_to_deliver)))
    }
}

// =============================================================================
// Delivery Options Table
// =============================================================================

/// Ordered, non-empty, immutable table of delivery options.
///
/// ## Invariants
/// - At least one option (so a default selection always exists)
/// - Every option passes [`validate_delivery_option`]
///
/// Both hold for values built with [`DeliveryOptions::new`] and for values
/// deserialized from JSON/TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DeliveryOption>", into = "Vec<DeliveryOption>")]
pub struct DeliveryOptions(Vec<DeliveryOption>);

impl DeliveryOptions {
    /// Builds a table, validating every option.
    pub fn new(options: Vec<DeliveryOption>) -> CoreResult<Self> {
        if options.is_empty() {
            return Err(CoreError::NoDeliveryOptions);
        }

        for option in &options {
            validate_delivery_option(option)?;
        }

        Ok(DeliveryOptions(options))
    }

    /// Index used when checkout does not pick an option: the last one.
    #[inline]
    pub fn default_index(&self) -> usize {
        self.0.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&DeliveryOption> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeliveryOption> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DeliveryOption] {
        &self.0
    }

    /// Resolves the effective selection.
    ///
    /// `None` selects [`default_index`](Self::default_index). An index past
    /// the end is reported instead of silently dropping shipping.
    pub fn resolve(&self, index: Option<usize>) -> CoreResult<(usize, &DeliveryOption)> {
        let index = index.unwrap_or_else(|| self.default_index());
        self.get(index)
            .map(|option| (index, option))
            .ok_or(CoreError::DeliveryOptionOutOfRange {
                index,
                available: self.len(),
            })
    }
}

/// The storefront's stock delivery table.
impl Default for DeliveryOptions {
    fn default() -> Self {
        DeliveryOptions(vec![
            DeliveryOption::new("Tomorrow", 1, Money::from_cents(1290), Money::zero()),
            DeliveryOption::new("Next 3 Days", 3, Money::from_cents(690), Money::zero()),
            DeliveryOption::new(
                "Next 5 Days",
                5,
                Money::from_cents(490),
                Money::from_cents(3500),
            ),
        ])
    }
}

impl TryFrom<Vec<DeliveryOption>> for DeliveryOptions {
    type Error = CoreError;

    fn try_from(options: Vec<DeliveryOption>) -> Result<Self, Self::Error> {
        DeliveryOptions::new(options)
    }
}

impl From<DeliveryOptions> for Vec<DeliveryOption> {
    fn from(options: DeliveryOptions) -> Self {
        options.0
    }
}

impl<'a> IntoIterator for &'a DeliveryOptions {
    type Item = &'a DeliveryOption;
    type IntoIter = std::slice::Iter<'a, DeliveryOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
