//! # Domain Types
//!
//! Core domain types shared by the pricing components.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │ ShippingAddress │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  client_id      │   │  full_name      │   │  bps (u32)      │       │
//! │  │  product_id     │   │  street, city   │   │  1500 = 15%     │       │
//! │  │  unit_price     │   │  postal_code    │   └─────────────────┘       │
//! │  │  quantity       │   │  country, phone │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line items and addresses are owned by the caller (cart/order context).
//! The pricing components only borrow them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (the storefront's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A cart/order entry.
///
/// Only `unit_price` and `quantity` take part in pricing. The remaining
/// fields travel with the item so the checkout can render the summary
/// without another catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Client-generated id (UUID v4), stable while the item sits in the cart.
    #[serde(default)]
    pub client_id: String,

    /// Catalog product id.
    #[serde(default)]
    pub product_id: String,

    /// Product name at time of adding (frozen).
    #[serde(default)]
    pub name: String,

    /// Product slug, used to link back to the product page.
    #[serde(default)]
    pub slug: String,

    /// Unit price at time of adding (frozen, unrounded).
    #[serde(alias = "price")]
    pub unit_price: Money,

    /// Quantity in cart.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item carrying only the fields pricing needs.
    ///
    /// A fresh client id is generated.
    pub fn new(unit_price: Money, quantity: u32) -> Self {
        LineItem {
            client_id: Uuid::new_v4().to_string(),
            product_id: String::new(),
            name: String::new(),
            slug: String::new(),
            unit_price,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity), unrounded.
    ///
    /// `None` when the product overflows.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Where the order ships to.
///
/// Pricing only cares whether an address is present: without one, shipping
/// and tax are not computed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub province: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1500);
        assert_eq!(rate.bps(), 1500);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new(Money::new(dec!(5.005)), 3);
        assert_eq!(item.line_total(), Some(Money::new(dec!(15.015))));
        assert!(uuid::Uuid::parse_str(&item.client_id).is_ok());
    }

    #[test]
    fn test_line_total_overflow() {
        let item = LineItem::new(Money::new(rust_decimal::Decimal::MAX), 2);
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_line_item_keeps_catalog_details() {
        let item: LineItem = serde_json::from_str(
            r#"{"productId":"p-1","name":"Nike Mens Slim-fit Long-Sleeve T-Shirt",
                "slug":"nike-mens-slim-fit-long-sleeve-t-shirt","price":"19.99","quantity":1}"#,
        )
        .unwrap();
        assert_eq!(item.product_id, "p-1");
        assert_eq!(item.slug, "nike-mens-slim-fit-long-sleeve-t-shirt");
    }

    #[test]
    fn test_line_item_accepts_catalog_price_field() {
        let item: LineItem = serde_json::from_str(r#"{"price": "10.00", "quantity": 2}"#).unwrap();
        assert_eq!(item.unit_price, Money::from_cents(1000));
        assert_eq!(item.quantity, 2);
        assert!(item.client_id.is_empty());
    }

    #[test]
    fn test_line_item_camel_case() {
        let item = LineItem::new(Money::from_cents(250), 4);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unitPrice"], "2.50");
        assert_eq!(json["quantity"], 4);
        assert!(json.get("clientId").is_some());
    }

    #[test]
    fn test_shipping_address_optional_fields() {
        let address: ShippingAddress = serde_json::from_str(
            r#"{"fullName":"Jane Doe","street":"1 Main St","city":"Springfield","postalCode":"12345","country":"USA"}"#,
        )
        .unwrap();
        assert_eq!(address.city, "Springfield");
        assert!(address.phone.is_empty());
    }
}
