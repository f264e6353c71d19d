//! # shopfront-core: Pure Pricing Logic for Shopfront
//!
//! This crate holds the checkout pricing rules of the storefront as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout frontend / quote CLI                      │   │
//! │  │      Cart ──► Shipping Address ──► Delivery Choice ──► Summary  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricingRequest                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ Calculator│  │   rules   │  │   │
//! │  │   │ Address   │  │  round2   │  │  Result   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  ┌───────────┐                                  │   │
//! │  │                  │ delivery  │  ◄── table injected by           │   │
//! │  │                  │  options  │      shopfront-config            │   │
//! │  │                  └───────────┘                                  │   │
//! │  │   NO I/O • NO DATABASE • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ShippingAddress, TaxRate)
//! - [`money`] - Decimal money type and the `round2` rule
//! - [`delivery`] - Delivery options table
//! - [`pricing`] - The pricing calculator
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for checkout data
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{DeliveryOptions, LineItem, Money, PricingCalculator};
//!
//! let calculator = PricingCalculator::new(DeliveryOptions::default());
//! let items = [LineItem::new(Money::from_cents(1099), 3)];
//!
//! let summary = calculator.compute(&items, None, None).unwrap();
//! assert_eq!(summary.items_price, Money::from_cents(3297));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod delivery;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use delivery::{DeliveryOption, DeliveryOptions};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{round2, Money};
pub use pricing::{PricingCalculator, PricingRequest, PricingResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to the items subtotal once an address is known.
///
/// A store policy constant: 1500 bps = 15%.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1500);

/// Maximum lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Longest lead time a delivery option may promise, in days.
pub const MAX_DAYS_TO_DELIVER: u32 = 365;
