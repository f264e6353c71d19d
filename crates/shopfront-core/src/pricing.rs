//! # Pricing Module
//!
//! Computes the order summary shown at checkout.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PricingCalculator::compute                           │
//! │                                                                         │
//! │  items ──► Σ unit_price × qty ──► round2 ──► items_price                │
//! │                                                 │                       │
//! │  delivery_index (or last) ──► DeliveryOption    │                       │
//! │                                     │           │                       │
//! │  shipping address? ─── no ──► shipping = None, tax = None               │
//! │        │                                                                │
//! │       yes                                                               │
//! │        ├──► shipping = 0 if free-shipping threshold met, else tier price│
//! │        └──► tax = round2(items_price × 15%)                             │
//! │                                                                         │
//! │  total = round2(items + round2(shipping|0) + round2(tax|0))             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator owns its delivery table and never touches global state, so
//! one instance can be shared by reference across threads.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::delivery::{DeliveryOption, DeliveryOptions};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, ShippingAddress, TaxRate};
use crate::SALES_TAX_RATE;

// =============================================================================
// Request / Result
// =============================================================================

/// The calculator's arguments as one serializable value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,

    /// Selected delivery option; `None` picks the last configured one.
    #[serde(default, alias = "deliveryDateIndex")]
    pub delivery_index: Option<usize>,
}

/// Order summary returned to checkout.
///
/// ## Invariants
/// - `items_price` is rounded and never negative for valid input
/// - `shipping_price` and `tax_price` are `Some` iff an address was given
/// - `total_price == round2(items + round2(shipping|0) + round2(tax|0))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// The full delivery table, so checkout can render every choice.
    pub available_delivery_options: Vec<DeliveryOption>,

    /// Effective selection (the default when the caller sent none).
    pub selected_delivery_index: usize,

    pub items_price: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_price: Option<Money>,

    pub total_price: Money,
}

impl PricingResult {
    /// The delivery option the totals were computed with.
    pub fn selected_option(&self) -> Option<&DeliveryOption> {
        self.available_delivery_options
            .get(self.selected_delivery_index)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Checkout pricing.
///
/// ## Usage
/// ```rust
/// use shopfront_core::{DeliveryOptions, LineItem, Money, PricingCalculator, ShippingAddress};
///
/// let calculator = PricingCalculator::new(DeliveryOptions::default());
/// let items = vec![LineItem::new(Money::from_cents(2000), 2)];
///
/// // Before the customer enters an address: subtotal only
/// let summary = calculator.compute(&items, None, None).unwrap();
/// assert_eq!(summary.total_price, Money::from_cents(4000));
/// assert!(summary.shipping_price.is_none());
///
/// // With an address: default "Next 5 Days" ships free above $35
/// let address = ShippingAddress::default();
/// let summary = calculator.compute(&items, Some(&address), None).unwrap();
/// assert_eq!(summary.shipping_price, Some(Money::zero()));
/// assert_eq!(summary.tax_price, Some(Money::from_cents(600)));
/// assert_eq!(summary.total_price, Money::from_cents(4600));
/// ```
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    delivery_options: DeliveryOptions,
    tax_rate: TaxRate,
}

impl PricingCalculator {
    /// Creates a calculator over the given delivery table.
    pub fn new(delivery_options: DeliveryOptions) -> Self {
        PricingCalculator {
            delivery_options,
            tax_rate: SALES_TAX_RATE,
        }
    }

    pub fn delivery_options(&self) -> &DeliveryOptions {
        &self.delivery_options
    }

    /// Items subtotal: `round2(Σ unit_price × quantity)`.
    ///
    /// ## Errors
    /// [`CoreError::AmountOverflow`] when a line or the sum does not fit.
    pub fn items_price(items: &[LineItem]) -> CoreResult<Money> {
        items
            .iter()
            .try_fold(Money::zero(), |total, item| total.checked_add(item.line_total()?))
            .map(|total| total.round2())
            .ok_or(CoreError::AmountOverflow)
    }

    /// Computes the order summary.
    ///
    /// ## Arguments
    /// * `items` - cart lines, may be empty
    /// * `shipping_address` - presence gates shipping and tax
    /// * `delivery_index` - selected option, `None` for the last one
    ///
    /// ## Errors
    /// - [`CoreError::DeliveryOptionOutOfRange`] when `delivery_index` is past
    ///   the end of the table
    /// - [`CoreError::AmountOverflow`] when a price is too large to total
    pub fn compute(
        &self,
        items: &[LineItem],
        shipping_address: Option<&ShippingAddress>,
        delivery_index: Option<usize>,
    ) -> CoreResult<PricingResult> {
        let (selected_delivery_index, delivery_option) =
            self.delivery_options.resolve(delivery_index)?;

        let items_price = Self::items_price(items)?;

        let (shipping_price, tax_price) = match shipping_address {
            Some(_) => {
                let tax = items_price
                    .calculate_tax(self.tax_rate)
                    .ok_or(CoreError::AmountOverflow)?;
                (Some(delivery_option.shipping_for(items_price)), Some(tax))
            }
            None => (None, None),
        };

        let total_price = [shipping_price, tax_price]
            .into_iter()
            .flatten()
            .try_fold(items_price, |total, price| total.checked_add(price.round2()))
            .ok_or(CoreError::AmountOverflow)?
            .round2();

        Ok(PricingResult {
            available_delivery_options: self.delivery_options.as_slice().to_vec(),
            selected_delivery_index,
            items_price,
            shipping_price,
            tax_price,
            total_price,
        })
    }

    /// Computes the order summary for a serialized request.
    pub fn quote(&self, request: &PricingRequest) -> CoreResult<PricingResult> {
        self.compute(
            &request.items,
            request.shipping_address.as_ref(),
            request.delivery_index,
        )
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        PricingCalculator::new(DeliveryOptions::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::round2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Jane Doe".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            province: String::new(),
            country: "USA".to_string(),
            phone: String::new(),
        }
    }

    /// One tier: $5 shipping, free from $20.
    fn threshold_calculator() -> PricingCalculator {
        let options = DeliveryOptions::new(vec![DeliveryOption::new(
            "Standard",
            5,
            Money::from_cents(500),
            Money::from_cents(2000),
        )])
        .unwrap();
        PricingCalculator::new(options)
    }

    fn mixed_cart() -> Vec<LineItem> {
        vec![
            LineItem::new(Money::new(dec!(10.00)), 2),
            LineItem::new(Money::new(dec!(5.005)), 1),
        ]
    }

    #[test]
    fn test_empty_cart_without_address() {
        let calculator = PricingCalculator::default();
        let result = calculator.compute(&[], None, None).unwrap();

        assert!(result.items_price.is_zero());
        assert_eq!(result.shipping_price, None);
        assert_eq!(result.tax_price, None);
        assert!(result.total_price.is_zero());
    }

    #[test]
    fn test_items_price_rounds_half_up() {
        assert_eq!(
            PricingCalculator::items_price(&mixed_cart()).unwrap().amount(),
            dec!(25.01)
        );
    }

    #[test]
    fn test_huge_price_reports_overflow() {
        let request: PricingRequest = serde_json::from_str(
            r#"{"items": [{"price": "79228162514264337593543950335", "quantity": 2}]}"#,
        )
        .unwrap();

        let err = PricingCalculator::default().quote(&request).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
    }

    #[test]
    fn test_overflowing_cart_sum_and_total_are_reported() {
        let calculator = PricingCalculator::default();
        let huge = LineItem::new(Money::new(Decimal::MAX), 1);

        // A single line fits, two of them do not
        assert!(calculator.compute(&[huge.clone()], None, None).is_ok());
        assert!(matches!(
            calculator.compute(&[huge.clone(), huge.clone()], None, None),
            Err(CoreError::AmountOverflow)
        ));

        // Tax on the maximum amount overflows once an address is given
        assert!(matches!(
            calculator.compute(&[huge], Some(&address()), None),
            Err(CoreError::AmountOverflow)
        ));
    }

    #[test]
    fn test_free_shipping_when_threshold_met() {
        let result = threshold_calculator()
            .compute(&mixed_cart(), Some(&address()), None)
            .unwrap();

        assert_eq!(result.items_price, Money::from_cents(2501));
        assert_eq!(result.shipping_price, Some(Money::zero()));
        assert_eq!(result.tax_price, Some(Money::from_cents(375)));
        assert_eq!(result.total_price, Money::from_cents(2876));
    }

    #[test]
    fn test_flat_shipping_below_threshold() {
        let items = vec![LineItem::new(Money::from_cents(1000), 1)];
        let result = threshold_calculator()
            .compute(&items, Some(&address()), Some(0))
            .unwrap();

        assert_eq!(result.items_price, Money::from_cents(1000));
        assert_eq!(result.shipping_price, Some(Money::from_cents(500)));
        assert_eq!(result.tax_price, Some(Money::from_cents(150)));
        assert_eq!(result.total_price, Money::from_cents(1650));
    }

    #[test]
    fn test_no_address_skips_shipping_and_tax() {
        let result = threshold_calculator()
            .compute(&mixed_cart(), None, Some(0))
            .unwrap();

        assert_eq!(result.shipping_price, None);
        assert_eq!(result.tax_price, None);
        assert_eq!(result.total_price, result.items_price);
    }

    #[test]
    fn test_omitted_index_selects_last_option() {
        let calculator = PricingCalculator::default();
        let items = vec![LineItem::new(Money::from_cents(1000), 1)];
        let result = calculator.compute(&items, Some(&address()), None).unwrap();

        assert_eq!(result.selected_delivery_index, 2);
        assert_eq!(result.selected_option().unwrap().name, "Next 5 Days");
        // $10 is under the $35 threshold
        assert_eq!(result.shipping_price, Some(Money::from_cents(490)));
        assert_eq!(result.available_delivery_options.len(), 3);
    }

    #[test]
    fn test_explicit_index_is_echoed() {
        let calculator = PricingCalculator::default();
        let items = vec![LineItem::new(Money::from_cents(10_000), 1)];
        let result = calculator.compute(&items, Some(&address()), Some(0)).unwrap();

        assert_eq!(result.selected_delivery_index, 0);
        // "Tomorrow" has no free-shipping threshold
        assert_eq!(result.shipping_price, Some(Money::from_cents(1290)));
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let calculator = PricingCalculator::default();
        let err = calculator
            .compute(&mixed_cart(), Some(&address()), Some(3))
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::DeliveryOptionOutOfRange {
                index: 3,
                available: 3
            }
        ));
    }

    #[test]
    fn test_quote_from_json_request() {
        let request: PricingRequest = serde_json::from_str(
            r#"{
                "items": [{"price": "10.00", "quantity": 2}, {"price": "5.005", "quantity": 1}],
                "shippingAddress": {
                    "fullName": "Jane Doe", "street": "1 Main St", "city": "Springfield",
                    "postalCode": "12345", "country": "USA"
                },
                "deliveryDateIndex": 0
            }"#,
        )
        .unwrap();

        let result = threshold_calculator().quote(&request).unwrap();
        assert_eq!(result.total_price, Money::from_cents(2876));
    }

    #[test]
    fn test_result_json_omits_absent_prices() {
        let result = PricingCalculator::default().compute(&[], None, None).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("shippingPrice").is_none());
        assert!(json.get("taxPrice").is_none());
        assert_eq!(json["itemsPrice"], "0.00");
        assert_eq!(json["selectedDeliveryIndex"], 2);
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        let calculator = PricingCalculator::default();
        let items = mixed_cart();
        let expected = calculator.compute(&items, Some(&address()), None).unwrap();

        let (calculator, items) = (&calculator, &items);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || calculator.compute(items, Some(&address()), None).unwrap())
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    /// Recomputing the total from the returned fields reproduces it, for
    /// random carts and random delivery tables.
    #[test]
    fn test_total_matches_components_for_random_carts() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..500 {
            let options: Vec<DeliveryOption> = (0..rng.gen_range(1..=4))
                .map(|i| {
                    let min = if rng.gen_bool(0.5) {
                        Money::zero()
                    } else {
                        Money::from_cents(rng.gen_range(1..20_000))
                    };
                    DeliveryOption::new(
                        format!("Tier {i}"),
                        rng.gen_range(1..10),
                        Money::from_cents(rng.gen_range(0..3_000)),
                        min,
                    )
                })
                .collect();
            let calculator = PricingCalculator::new(DeliveryOptions::new(options).unwrap());

            let items: Vec<LineItem> = (0..rng.gen_range(0..8))
                .map(|_| {
                    // Three fractional digits to exercise sub-cent prices
                    let price = Decimal::new(rng.gen_range(0..100_000), 3);
                    LineItem::new(Money::new(price), rng.gen_range(0..20))
                })
                .collect();

            let shipping_address = rng.gen_bool(0.7).then(address);
            let index = rng
                .gen_bool(0.5)
                .then(|| rng.gen_range(0..calculator.delivery_options().len()));

            let result = calculator
                .compute(&items, shipping_address.as_ref(), index)
                .unwrap();

            assert!(!result.items_price.is_negative());
            assert_eq!(result.shipping_price.is_some(), shipping_address.is_some());
            assert_eq!(result.tax_price.is_some(), shipping_address.is_some());

            let recomputed = round2(
                result.items_price.amount()
                    + result.shipping_price.map_or(Decimal::ZERO, |p| round2(p.amount()))
                    + result.tax_price.map_or(Decimal::ZERO, |p| round2(p.amount())),
            );
            assert_eq!(result.total_price.amount(), recomputed);

            let again = calculator
                .compute(&items, shipping_address.as_ref(), index)
                .unwrap();
            assert_eq!(again, result);
        }
    }
}
