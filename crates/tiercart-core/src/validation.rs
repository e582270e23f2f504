//! # Validation Module
//!
//! Value checks for code sitting at the input boundary.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Adapter (tiercart-cli)                                       │
//! │  ├── Token parsing (integers only)                                     │
//! │  └── THIS MODULE: range checks on counts and prices                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Store / Pricing Engine                                  │
//! │  └── No checks. Inputs are already validated.                          │
//! │                                                                         │
//! │  BracketTable::new also uses validate_discount_percent                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiercart_core::validation::{validate_item_count, validate_unit_price};
//!
//! assert!(validate_item_count(3).is_ok());
//! assert!(validate_unit_price(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest percentage a bracket may take off.
pub const MAX_DISCOUNT_PERCENT: u32 = 100;

/// Largest accepted unit price. Any quantity a cart can hold times this
/// price still fits in `i64`.
pub const MAX_UNIT_PRICE: i64 = i64::MAX / u32::MAX as i64;

/// Validates a unit price and converts it to [`Money`].
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_UNIT_PRICE
///
/// ## Example
/// ```rust
/// use tiercart_core::validation::validate_unit_price;
///
/// assert_eq!(validate_unit_price(15).unwrap().amount(), 15);
/// assert!(validate_unit_price(0).is_ok());
/// assert!(validate_unit_price(-100).is_err());
/// assert!(validate_unit_price(i64::MAX).is_err());
/// ```
pub fn validate_unit_price(price: i64) -> ValidationResult<Money> {
    if price < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
            value: price,
        });
    }
    if price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(Money::from_minor(price))
}

/// Validates the declared number of item lines.
///
/// ## Rules
/// - Must be non-negative; zero means an empty cart
pub fn validate_item_count(count: i64) -> ValidationResult<usize> {
    if count < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "item count".to_string(),
            value: count,
        });
    }

    usize::try_from(count).map_err(|_| ValidationError::OutOfRange {
        field: "item count".to_string(),
        min: 0,
        max: i64::MAX,
    })
}

/// Validates a bracket discount percentage.
///
/// ## Rules
/// - Must be between 0 and MAX_DISCOUNT_PERCENT (100)
pub fn validate_discount_percent(percent: u32) -> ValidationResult<()> {
    if percent > MAX_DISCOUNT_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: i64::from(MAX_DISCOUNT_PERCENT),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_price() {
        assert_eq!(validate_unit_price(0).unwrap(), Money::zero());
        assert_eq!(validate_unit_price(1099).unwrap().amount(), 1099);
        assert_eq!(
            validate_unit_price(-1),
            Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
                value: -1
            })
        );
    }

    #[test]
    fn test_validate_unit_price_upper_bound() {
        assert_eq!(MAX_UNIT_PRICE, 2_147_483_648);
        assert!(validate_unit_price(MAX_UNIT_PRICE).is_ok());
        assert_eq!(
            validate_unit_price(MAX_UNIT_PRICE + 1),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE
            })
        );

        // The largest price at the largest quantity still fits
        let price = validate_unit_price(MAX_UNIT_PRICE).unwrap();
        assert!(price.checked_multiply_quantity(u32::MAX).is_some());
    }

    #[test]
    fn test_validate_item_count() {
        assert_eq!(validate_item_count(0).unwrap(), 0);
        assert_eq!(validate_item_count(42).unwrap(), 42);
        assert!(validate_item_count(-3).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(30).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }
}
