//! # tiercart-core: Cart Aggregation and Tiered Discount Pricing
//!
//! Pure business logic with zero I/O. A caller adds items one occurrence
//! at a time, the cart merges them by name, and the pricing engine turns
//! the cart into a total plus a per-category discount breakdown.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tiercart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tiercart-cli (line adapter)                     │   │
//! │  │   stdin ──► parse N + (index, price) ──► report ──► stdout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add / compute_total / item_counts     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiercart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │   Item    │  │   Money   │  │ CartStore │  │  Engine   │  │   │
//! │  │   │ Category  │  │  floor %  │  │ EntryView │  │ Brackets  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE CART • SINGLE THREAD        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, DiscountRate, DiscountCategory
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The insertion-ordered cart store
//! - [`pricing`] - Bracket table and pricing engine
//! - [`validation`] - Range checks for adapters
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tiercart_core::{CartStore, Item, Money, PricingEngine};
//!
//! let mut cart = CartStore::new();
//! cart.add(&Item::new("A", Money::from_minor(30)));
//! cart.add(&Item::new("B", Money::from_minor(5)));
//!
//! let engine = PricingEngine::default();
//! let summary = engine.compute_total(&cart).unwrap();
//!
//! // A: 30 - 3, B: 5 - 0
//! assert_eq!(summary.total.amount(), 32);
//! assert_eq!(engine.item_counts(&cart), vec![("A".to_string(), 1), ("B".to_string(), 1)]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartStore, EntryView};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{
    item_counts, BracketTable, CategoryDiscounts, LineQuote, PriceBracket, PriceCondition,
    PriceSummary, PricingEngine,
};
pub use types::*;

/// Prefix the line adapter puts in front of each order index.
pub const ORDER_NAME_PREFIX: &str = "Order-";
