//! # cedar-core: Pure Business Logic for Cedar POS
//!
//! This crate is the **heart** of Cedar POS. It contains the order/cart
//! computation and currency-aware numeric-entry subsystem as pure logic with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cedar POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    GUI Shell (touchscreen)                      │   │
//! │  │    Sign-in ──► Catalog grid ──► Order panel ──► Tender pad     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain data only                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               cedar-terminal (session layer)                    │   │
//! │  │    PosSession: product/tender/preset/key dispatch               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cedar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   order   │  │   entry   │  │ validation│  │   │
//! │  │   │   Money   │  │ LineItem  │  │  Numpad   │  │   rules   │  │   │
//! │  │   │           │  │   Order   │  │  presets  │  │  tenders  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  ┌───────────┐  ┌───────────┐                  │   │
//! │  │                  │ exchange  │  │  format   │                  │   │
//! │  │                  │ Rate/LBP  │  │ grouping  │                  │   │
//! │  │                  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO WIDGETS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain enums (Currency, EntryMode, Tender, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - LineItem and the merge-by-name Order aggregate
//! - [`entry`] - The numeric entry (numpad) state machine
//! - [`presets`] - Currency-tagged denomination buttons and the lock
//! - [`validation`] - The per-mode rules table, the single rejection authority
//! - [`exchange`] - Exchange rate and truncating USD→LBP conversion
//! - [`format`] - Grouped display strings
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: validation returns typed `Result`s, never panics -
//!    the worst case of any error is "nothing changes, user is told why"
//!
//! ## Example Usage
//!
//! ```rust
//! use cedar_core::money::Money;
//! use cedar_core::order::Order;
//! use cedar_core::types::EntryMode;
//! use cedar_core::validation::validate;
//!
//! let mut order = Order::new();
//! order.add_item("Coffee", Money::from_cents(350), 2).unwrap();
//! assert_eq!(order.total().cents(), 700);
//!
//! assert!(validate(EntryMode::Quantity, "3").is_ok());
//! assert!(validate(EntryMode::Quantity, "10000").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entry;
pub mod error;
pub mod exchange;
pub mod format;
pub mod money;
pub mod order;
pub mod presets;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cedar_core::Money` instead of
// `use cedar_core::money::Money`

pub use entry::NumericEntry;
pub use error::{CoreError, CoreResult, ValidationError};
pub use exchange::{ExchangeRate, OrderTotals};
pub use money::Money;
pub use order::{LineItem, LineItemView, Order, OrderSummary};
pub use presets::{Preset, PresetButton, PresetPanel};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single order
///
/// ## Business Reason
/// Prevents runaway orders and keeps the order panel scrollable on a
/// touchscreen. Can be made configurable per-store in future versions.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity of a single line
///
/// ## Business Reason
/// Matches the quantity validation rule's upper bound, so a merge can never
/// push a line past what the keypad could have entered directly.
pub const MAX_LINE_QUANTITY: i64 = 9999;
