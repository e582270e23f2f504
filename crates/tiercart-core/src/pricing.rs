//! # Pricing Engine
//!
//! Computes the cart's payable total and the discount credited to each
//! price bracket category.
//!
//! ## Per-Line Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     compute_total(cart)                                 │
//! │                                                                         │
//! │  for each entry in cart order:                                         │
//! │                                                                         │
//! │    subtotal     = unit_price × quantity                                │
//! │    (rate, cat)  = brackets.classify(unit_price)   ◄── first match wins │
//! │    discount     = floor(subtotal × rate / 100)                         │
//! │    if cat is credited: buckets[cat] += discount                         │
//! │    net_subtotal = subtotal - discount                                  │
//! │    total       += net_subtotal                                         │
//! │                                                                         │
//! │  The buckets start empty on every call. Every product and sum is       │
//! │  checked; overflow stops the pass with AmountOverflow.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Default Brackets
//! | Order | Condition          | Rate | Category  |
//! |-------|--------------------|------|-----------|
//! | 1     | price > 10         | 10%  | Cheap     |
//! | 2     | 10 < price <= 20   | 20%  | Moderate  |
//! | 3     | price > 20         | 30%  | Expensive |
//! | -     | otherwise          | 1%   | none      |
//!
//! Rule 1 already captures every price above 10, so rules 2 and 3 never
//! match. The table keeps them in this order on purpose: the observed
//! behavior is a flat 10% "Cheap" discount above 10 and 1% at or below.
//! Whether a real three-tier scheme was intended is still an open product
//! question.
//!
//! ## Usage
//! ```rust
//! use tiercart_core::{CartStore, Item, Money, PricingEngine, DiscountCategory};
//!
//! let mut cart = CartStore::new();
//! cart.add(&Item::new("Order-1", Money::from_minor(15)));
//!
//! let summary = PricingEngine::default().compute_total(&cart).unwrap();
//! assert_eq!(summary.total.amount(), 14);
//! assert_eq!(summary.category_discounts.get(DiscountCategory::Cheap).unwrap().amount(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::cart::CartStore;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountCategory, DiscountRate};
use crate::validation::validate_discount_percent;

// =============================================================================
// Brackets
// =============================================================================

/// A price range. Both bounds are optional; an empty condition matches
/// every price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceCondition {
    /// Exclusive lower bound (`price > above`).
    #[serde(default)]
    pub above: Option<Money>,

    /// Inclusive upper bound (`price <= at_most`).
    #[serde(default)]
    pub at_most: Option<Money>,
}

impl PriceCondition {
    pub const fn above(bound: Money) -> Self {
        PriceCondition {
            above: Some(bound),
            at_most: None,
        }
    }

    pub const fn between(above: Money, at_most: Money) -> Self {
        PriceCondition {
            above: Some(above),
            at_most: Some(at_most),
        }
    }

    pub fn matches(&self, price: Money) -> bool {
        self.above.map_or(true, |lo| price > lo) && self.at_most.map_or(true, |hi| price <= hi)
    }
}

/// One `(predicate, percentage, label)` rule in a [`BracketTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBracket {
    #[serde(flatten)]
    pub condition: PriceCondition,
    pub rate: DiscountRate,
    pub category: DiscountCategory,
}

impl PriceBracket {
    pub const fn new(condition: PriceCondition, rate: DiscountRate, category: DiscountCategory) -> Self {
        PriceBracket {
            condition,
            rate,
            category,
        }
    }
}

/// Ordered bracket rules evaluated top to bottom, first match wins.
///
/// Prices that match no rule get the `fallback` rate and
/// [`DiscountCategory::Uncategorized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    rules: Vec<PriceBracket>,
    fallback: DiscountRate,
}

impl BracketTable {
    /// Builds a table after checking every rate and label.
    ///
    /// ## Errors
    /// - `InvalidBracket` if a rule is labelled `Uncategorized`
    /// - `Validation` if any rate (fallback included) exceeds 100%
    pub fn new(rules: Vec<PriceBracket>, fallback: DiscountRate) -> CoreResult<Self> {
        validate_discount_percent(fallback.percent())?;

        for (index, rule) in rules.iter().enumerate() {
            validate_discount_percent(rule.rate.percent())?;
            if !rule.category.is_credited() {
                return Err(CoreError::InvalidBracket {
                    reason: format!("rule {} is labelled uncategorized", index + 1),
                });
            }
        }

        Ok(BracketTable { rules, fallback })
    }

    pub fn rules(&self) -> &[PriceBracket] {
        &self.rules
    }

    pub fn fallback(&self) -> DiscountRate {
        self.fallback
    }

    /// Picks the rate and category for a unit price.
    pub fn classify(&self, unit_price: Money) -> (DiscountRate, DiscountCategory) {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(unit_price))
            .map(|rule| (rule.rate, rule.category))
            .unwrap_or((self.fallback, DiscountCategory::Uncategorized))
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        let ten = Money::from_minor(10);
        let twenty = Money::from_minor(20);

        BracketTable {
            rules: vec![
                PriceBracket::new(
                    PriceCondition::above(ten),
                    DiscountRate::from_percent(10),
                    DiscountCategory::Cheap,
                ),
                // Shadowed by the rule above
                PriceBracket::new(
                    PriceCondition::between(ten, twenty),
                    DiscountRate::from_percent(20),
                    DiscountCategory::Moderate,
                ),
                // Shadowed by the first rule
                PriceBracket::new(
                    PriceCondition::above(twenty),
                    DiscountRate::from_percent(30),
                    DiscountCategory::Expensive,
                ),
            ],
            fallback: DiscountRate::from_percent(1),
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Discount sums per category, in category order.
///
/// Only credited categories ever get a bucket. A bucket can hold 0 when a
/// matching line floored to no discount.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryDiscounts(BTreeMap<DiscountCategory, Money>);

impl CategoryDiscounts {
    pub fn new() -> Self {
        CategoryDiscounts(BTreeMap::new())
    }

    /// Adds `amount` to the bucket, returning `None` if it would overflow.
    fn credit(&mut self, category: DiscountCategory, amount: Money) -> Option<Money> {
        let bucket = self.0.entry(category).or_default();
        *bucket = bucket.checked_add(amount)?;
        Some(*bucket)
    }

    pub fn get(&self, category: DiscountCategory) -> Option<Money> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DiscountCategory, Money)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }

    /// Buckets with a value above zero, which is what gets reported.
    pub fn nonzero(&self) -> impl Iterator<Item = (DiscountCategory, Money)> + '_ {
        self.iter().filter(|(_, amount)| amount.is_positive())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The priced breakdown of one cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineQuote {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
    pub rate: DiscountRate,
    pub category: DiscountCategory,
    pub discount: Money,
    pub net_subtotal: Money,
}

/// Output of one pricing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    /// Sum of every line's net subtotal.
    pub total: Money,
    pub category_discounts: CategoryDiscounts,
    /// One quote per cart entry, in cart order.
    pub lines: Vec<LineQuote>,
}

// =============================================================================
// Engine
// =============================================================================

/// Prices a [`CartStore`] against a [`BracketTable`].
///
/// The engine only reads the cart. Each call to
/// [`compute_total`](Self::compute_total) builds its accumulator from
/// scratch, so calling it twice on an unchanged cart gives the same result.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    brackets: BracketTable,
}

impl PricingEngine {
    pub fn new(brackets: BracketTable) -> Self {
        PricingEngine { brackets }
    }

    pub fn brackets(&self) -> &BracketTable {
        &self.brackets
    }

    /// Prices every entry in cart order and sums the results.
    ///
    /// ## Errors
    /// - `AmountOverflow` naming the first line whose subtotal, bucket or
    ///   running total does not fit in `i64`
    pub fn compute_total(&self, cart: &CartStore) -> CoreResult<PriceSummary> {
        let mut total = Money::zero();
        let mut category_discounts = CategoryDiscounts::new();
        let mut lines = Vec::with_capacity(cart.len());

        for entry in cart.entries() {
            let overflow = || CoreError::AmountOverflow {
                name: entry.name.to_string(),
            };

            let subtotal = entry
                .unit_price
                .checked_multiply_quantity(entry.quantity)
                .ok_or_else(overflow)?;
            let (rate, category) = self.brackets.classify(entry.unit_price);
            let discount = subtotal.discount_at(rate);

            if category.is_credited() {
                category_discounts
                    .credit(category, discount)
                    .ok_or_else(overflow)?;
            }

            let net_subtotal = subtotal - discount;
            total = total.checked_add(net_subtotal).ok_or_else(overflow)?;

            debug!(
                name = entry.name,
                %subtotal,
                %rate,
                %category,
                %discount,
                %net_subtotal,
                "Priced cart line"
            );

            lines.push(LineQuote {
                name: entry.name.to_string(),
                unit_price: entry.unit_price,
                quantity: entry.quantity,
                subtotal,
                rate,
                category,
                discount,
                net_subtotal,
            });
        }

        info!(%total, lines = lines.len(), "Computed cart total");

        Ok(PriceSummary {
            total,
            category_discounts,
            lines,
        })
    }

    /// Item name to current quantity, in cart order.
    pub fn item_counts(&self, cart: &CartStore) -> Vec<(String, u32)> {
        item_counts(cart)
    }
}

/// Item name to current quantity, in cart order.
pub fn item_counts(cart: &CartStore) -> Vec<(String, u32)> {
    cart.entries()
        .map(|e| (e.name.to_string(), e.quantity))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
