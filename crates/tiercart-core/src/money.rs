//! # Money Module
//!
//! Provides the `Money` type for cart amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INTEGER MINOR UNITS                                                    │
//! │                                                                         │
//! │  Prices arrive as plain integers and every discount is floored:         │
//! │    floor(15 × 10 / 100) = 1     (never 1.5)                             │
//! │                                                                         │
//! │  The engine is currency agnostic. An amount of 15 is "15 units" of      │
//! │  whatever the caller priced in. Display prints the bare integer.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiercart_core::money::Money;
//! use tiercart_core::types::DiscountRate;
//!
//! let price = Money::from_minor(15);
//! let subtotal = price.checked_multiply_quantity(2).unwrap();   // 30
//! let discount = subtotal.discount_at(DiscountRate::from_percent(10));
//! assert_eq!(discount.amount(), 3);
//! assert_eq!((subtotal - discount).amount(), 27);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest unit the caller prices in.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of a discount never needs a branch
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serialises as a bare JSON number
///
/// ## Where Money Flows
/// ```text
/// Item.unit_price ──► CartEntry.unit_price ──► LineQuote.subtotal
///                                                   │
///                          discount_at(rate) ◄──────┤
///                                                   ▼
///                                   LineQuote.net_subtotal ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use tiercart_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.amount(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tiercart_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(10);
    /// assert_eq!(unit_price.checked_multiply_quantity(2).unwrap().amount(), 20);
    /// assert!(Money::from_minor(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns the discount owed on this amount at `rate`, rounded down.
    ///
    /// ## Flooring
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  discount = floor(amount × percent / 100)                          │
    /// │                                                                     │
    /// │    15 at 10%  →  150 / 100 = 1.5  →  1                             │
    /// │    20 at  1%  →   20 / 100 = 0.2  →  0                             │
    /// │    30 at 10%  →  300 / 100 = 3    →  3                             │
    /// │                                                                     │
    /// │  The remainder always stays with the customer's payable amount.    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// i128 keeps the intermediate product from overflowing and
    /// `div_euclid` floors rather than truncates.
    pub fn discount_at(&self, rate: DiscountRate) -> Money {
        let discount = (self.0 as i128 * rate.percent() as i128).div_euclid(100);
        Money::from_minor(discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Prints the bare amount, which is what the report lines show.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
