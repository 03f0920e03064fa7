//! # Error Types
//!
//! Domain-specific error types for cedar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cedar-core errors (this file)                                         │
//! │  ├── CoreError        - Order/session business-rule errors             │
//! │  └── ValidationError  - Numeric entry validation failures              │
//! │                                                                         │
//! │  cedar-terminal errors (app crate)                                     │
//! │  └── ApiError         - What the GUI shell sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → GUI shell              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (bound, item name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps directly to a user-facing message; nothing in this
//!    crate panics or raises across the order/entry boundary

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order and session business-rule errors.
///
/// These represent rule violations detected while mutating the order or
/// dispatching a user action. They are caught at the controller layer and
/// shown to the cashier; none of them are fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A payment action was invoked with nothing typed on the numpad.
    #[error("enter an amount first")]
    AmountRequired,

    /// The named line item is not in the order.
    #[error("item not in order: {0}")]
    ItemNotFound(String),

    /// The product name is not in the catalog (or has no price).
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// Order has reached the maximum number of distinct lines.
    #[error("order cannot hold more than {max} items")]
    OrderFull { max: usize },

    /// A line quantity would exceed the maximum allowed.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Exchange rate must be strictly positive.
    ///
    /// A zero or negative rate would silently corrupt the local-currency
    /// total, so construction is guarded.
    #[error("exchange rate must be positive")]
    InvalidExchangeRate,

    /// A duplicate-quantity choice arrived with no decision pending.
    #[error("no duplicate decision is pending")]
    NoPendingDecision,

    /// Numeric entry validation failed (wraps ValidationError).
    ///
    /// The message is the validation reason itself; callers surface it
    /// verbatim to the cashier.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric entry validation errors.
///
/// Produced by the rules table in [`crate::validation`]. Every variant is a
/// user-facing reason; the controller never converts these to anything
/// richer than a message string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing entered yet (empty, literal "0", or a bare decimal point).
    ///
    /// Distinct from a confirmed zero: an order quantity of zero is a
    /// removal, but an *entry* of "0" means the cashier typed nothing.
    #[error("value required")]
    ValueRequired,

    /// A decimal point appeared in a mode that forbids decimals.
    #[error("decimals not allowed")]
    DecimalNotAllowed,

    /// The raw string does not parse as a number for the active mode.
    #[error("invalid number format")]
    InvalidFormat,

    /// Parsed value is below the mode's minimum.
    #[error("must be at least {min}")]
    BelowMinimum { min: String },

    /// Parsed value is above the mode's maximum.
    #[error("cannot exceed {max}")]
    AboveMaximum { max: String },

    /// More fractional digits than the mode allows.
    ///
    /// Kept distinct from [`ValidationError::InvalidFormat`]: local-currency
    /// cash has a stricter decimal pre-check that must report this reason.
    #[error("at most {max} decimal places allowed")]
    TooManyDecimalPlaces { max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
