//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing/domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  shopfront-config errors (separate crate)                               │
//! │  └── ConfigError      - Config file / environment failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConfigError → CLI (anyhow)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, index, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested delivery option does not exist.
    ///
    /// ## When This Occurs
    /// - Checkout posts a stale index after the delivery table shrank
    /// - A hand-written request picks an index past the end
    #[error("Delivery option {index} does not exist ({available} configured)")]
    DeliveryOptionOutOfRange { index: usize, available: usize },

    /// A delivery table was built without any options.
    ///
    /// The default selection is the last option, so at least one is required.
    #[error("At least one delivery option must be configured")]
    NoDeliveryOptions,

    /// A price, subtotal or total does not fit in a `Decimal`.
    #[error("Order amount is too large to price")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before pricing runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A line item failed validation.
    #[error("Line item {index}: {source}")]
    LineItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DeliveryOptionOutOfRange {
            index: 7,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Delivery option 7 does not exist (3 configured)"
        );
        assert_eq!(
            CoreError::NoDeliveryOptions.to_string(),
            "At least one delivery option must be configured"
        );
        assert_eq!(
            CoreError::AmountOverflow.to_string(),
            "Order amount is too large to price"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "city".to_string(),
        };
        assert_eq!(err.to_string(), "city is required");

        let err = ValidationError::LineItem {
            index: 2,
            source: Box::new(ValidationError::MustNotBeNegative {
                field: "unit price".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "Line item 2: unit price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
