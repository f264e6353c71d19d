//! # Validation Module
//!
//! Input validation for checkout data.
//!
//! The calculator trusts its input: catalog and cart layers hand it records
//! that were already validated. This module holds the checks those layers
//! run before calling it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout boundary (Rust)                                      │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: quantities, prices, addresses, delivery table         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingCalculator (overflow checks only)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_line_items, validate_quantity};
//! use shopfront_core::{LineItem, Money};
//!
//! validate_quantity(5).unwrap();
//! validate_line_items(&[LineItem::new(Money::from_cents(1099), 2)]).unwrap();
//! ```

use crate::delivery::DeliveryOption;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{LineItem, ShippingAddress};
use crate::{MAX_CART_ITEMS, MAX_DAYS_TO_DELIVER, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted free-text address field.
const MAX_ADDRESS_FIELD_LEN: usize = 200;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Zero is allowed (an emptied line that the cart has not pruned yet)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    Ok(())
}

/// Validates a price field.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_price;
/// use shopfront_core::Money;
///
/// assert!(validate_price("price", Money::from_cents(1099)).is_ok());
/// assert!(validate_price("price", Money::zero()).is_ok());     // Free item
/// assert!(validate_price("price", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Line Items
// =============================================================================

/// Validates a client-generated line item id.
///
/// Empty ids are accepted (items coming straight from the catalog have none).
pub fn validate_client_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Ok(());
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "client id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates a single line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_client_id(&item.client_id)?;
    validate_price("unit price", item.unit_price)?;
    validate_quantity(item.quantity)
}

/// Validates every line of a cart.
///
/// ## Rules
/// - At most MAX_CART_ITEMS (100) lines
/// - Each line passes [`validate_line_item`]; the error names the line
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.len() > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    for (index, item) in items.iter().enumerate() {
        validate_line_item(item).map_err(|source| ValidationError::LineItem {
            index,
            source: Box::new(source),
        })?;
    }

    Ok(())
}

// =============================================================================
// Shipping Address
// =============================================================================

fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_ADDRESS_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ADDRESS_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates a shipping address.
///
/// ## Rules
/// - full name, street, city, postal code and country are required
/// - no field longer than 200 characters
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    require_text("full name", &address.full_name)?;
    require_text("street", &address.street)?;
    require_text("city", &address.city)?;
    require_text("postal code", &address.postal_code)?;
    require_text("country", &address.country)?;

    for (field, value) in [("province", &address.province), ("phone", &address.phone)] {
        if value.chars().count() > MAX_ADDRESS_FIELD_LEN {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: MAX_ADDRESS_FIELD_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Delivery Options
// =============================================================================

/// Validates one delivery option.
///
/// ## Rules
/// - name must not be blank
/// - lead time at most MAX_DAYS_TO_DELIVER (365) days
/// - shipping price and free-shipping threshold must not be negative
pub fn validate_delivery_option(option: &DeliveryOption) -> ValidationResult<()> {
    if option.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "delivery option name".to_string(),
        });
    }

    if option.days_to_deliver > MAX_DAYS_TO_DELIVER {
        return Err(ValidationError::OutOfRange {
            field: "days to deliver".to_string(),
            min: 0,
            max: i64::from(MAX_DAYS_TO_DELIVER),
        });
    }

    validate_price("shipping price", option.shipping_price)?;
    validate_price("free shipping minimum", option.free_shipping_min_price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Jane Doe".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            province: "IL".to_string(),
            country: "USA".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_cents(1099)).is_ok());
        assert!(validate_price("price", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_client_id() {
        assert!(validate_client_id("").is_ok());
        assert!(validate_client_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_client_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_line_items() {
        let good = LineItem::new(Money::from_cents(1000), 2);
        assert!(validate_line_items(&[]).is_ok());
        assert!(validate_line_items(&[good.clone()]).is_ok());

        let bad = LineItem::new(Money::from_cents(-5), 1);
        let err = validate_line_items(&[good.clone(), bad]).unwrap_err();
        assert!(matches!(err, ValidationError::LineItem { index: 1, .. }));

        let too_many = vec![good; MAX_CART_ITEMS + 1];
        assert!(matches!(
            validate_line_items(&too_many),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_shipping_address() {
        assert!(validate_shipping_address(&address()).is_ok());

        let mut missing_city = address();
        missing_city.city = "   ".to_string();
        assert!(matches!(
            validate_shipping_address(&missing_city),
            Err(ValidationError::Required { .. })
        ));

        let mut optional_blank = address();
        optional_blank.province.clear();
        optional_blank.phone.clear();
        assert!(validate_shipping_address(&optional_blank).is_ok());

        let mut long_phone = address();
        long_phone.phone = "9".repeat(300);
        assert!(matches!(
            validate_shipping_address(&long_phone),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_delivery_option() {
        let ok = DeliveryOption::new("Tomorrow", 1, Money::from_cents(1290), Money::zero());
        assert!(validate_delivery_option(&ok).is_ok());

        let negative = DeliveryOption::new("Tomorrow", 1, Money::from_cents(-1), Money::zero());
        assert!(validate_delivery_option(&negative).is_err());

        let blank = DeliveryOption::new(" ", 1, Money::zero(), Money::zero());
        assert!(validate_delivery_option(&blank).is_err());

        let year = DeliveryOption::new("Slow", 365, Money::zero(), Money::zero());
        assert!(validate_delivery_option(&year).is_ok());

        let slow = DeliveryOption::new("Slow", 4_000_000_000, Money::zero(), Money::zero());
        assert!(matches!(
            validate_delivery_option(&slow),
            Err(ValidationError::OutOfRange { max: 365, .. })
        ));
    }
}
