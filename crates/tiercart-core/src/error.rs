//! # Error Types
//!
//! Domain-specific error types for tiercart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiercart-core errors (this file)                                      │
//! │  ├── CoreError        - Bracket table and amount overflow failures     │
//! │  └── ValidationError  - Input value checks used by adapters            │
//! │                                                                         │
//! │  tiercart-cli errors (app)                                             │
//! │  └── CliError         - I/O, input parsing, config (exit codes)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutation never fails. Removing an absent item is a no-op, not an
//! error. Pricing fails only when an amount leaves the `i64` range.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// A bracket table could not be built.
    ///
    /// ## When This Occurs
    /// - A configured rule is labelled `uncategorized`
    #[error("Invalid bracket table: {reason}")]
    InvalidBracket { reason: String },

    /// A line subtotal, discount bucket or cart total does not fit in `i64`.
    #[error("Amount overflow while pricing '{name}'")]
    AmountOverflow { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`validation`](crate::validation) helpers, which adapters
/// call before values reach the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
