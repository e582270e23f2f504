//! # Domain Types
//!
//! Value types shared by the cart store and the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      Item       │   │  DiscountRate   │   │  DiscountCategory   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name (key)     │   │  percent (u32)  │   │  Cheap              │   │
//! │  │  unit_price     │   │  10 = 10%       │   │  Moderate           │   │
//! │  └─────────────────┘   └─────────────────┘   │  Expensive          │   │
//! │                                              │  Uncategorized      │   │
//! │                                              └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! An [`Item`] is identified by its `name` alone. Two items with the same
//! name and different prices are the same cart line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate in whole percent.
///
/// Brackets only ever use whole percentages (1, 10, 20, 30), so the rate
/// is kept as an integer percent rather than basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from a whole percentage.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent)
    }

    /// Returns the rate as a whole percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A named, priced unit offered for purchase.
///
/// Immutable once built. Construct it directly with [`Item::new`]; there is
/// no builder because nothing about an item needs validating here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    unit_price: Money,
}

impl Item {
    /// Creates an item from its identity key and unit price.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Item {
            name: name.into(),
            unit_price,
        }
    }

    /// The identity key used to merge cart lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Discount Category
// =============================================================================

/// The closed set of discount buckets a price bracket can credit.
///
/// ## Ordering
/// The derived `Ord` follows declaration order. The category accumulator
/// is keyed by this type, so reports always list `Cheap`, then `Moderate`,
/// then `Expensive`.
///
/// `Uncategorized` is what the fallback bracket assigns. It is never
/// credited to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountCategory {
    Cheap,
    Moderate,
    Expensive,
    Uncategorized,
}

impl DiscountCategory {
    /// Label used in report lines, e.g. `"Cheap Category Discount: 1"`.
    pub const fn label(&self) -> &'static str {
        match self {
            DiscountCategory::Cheap => "Cheap",
            DiscountCategory::Moderate => "Moderate",
            DiscountCategory::Expensive => "Expensive",
            DiscountCategory::Uncategorized => "Uncategorized",
        }
    }

    /// Whether discounts in this category are summed into a bucket.
    pub const fn is_credited(&self) -> bool {
        !matches!(self, DiscountCategory::Uncategorized)
    }
}

impl fmt::Display for DiscountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = Item::new("Order-1", Money::from_minor(15));
        assert_eq!(item.name(), "Order-1");
        assert_eq!(item.unit_price().amount(), 15);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(DiscountCategory::Cheap.label(), "Cheap");
        assert_eq!(DiscountCategory::Moderate.to_string(), "Moderate");
        assert_eq!(DiscountCategory::Expensive.label(), "Expensive");
    }

    #[test]
    fn test_only_uncategorized_is_not_credited() {
        assert!(DiscountCategory::Cheap.is_credited());
        assert!(DiscountCategory::Moderate.is_credited());
        assert!(DiscountCategory::Expensive.is_credited());
        assert!(!DiscountCategory::Uncategorized.is_credited());
    }

    #[test]
    fn test_category_order_is_declaration_order() {
        assert!(DiscountCategory::Cheap < DiscountCategory::Moderate);
        assert!(DiscountCategory::Moderate < DiscountCategory::Expensive);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&DiscountCategory::Expensive).unwrap();
        assert_eq!(json, "\"expensive\"");
        let parsed: DiscountCategory = serde_json::from_str("\"cheap\"").unwrap();
        assert_eq!(parsed, DiscountCategory::Cheap);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(DiscountRate::from_percent(10).to_string(), "10%");
        assert!(DiscountRate::default().is_zero());
    }
}
