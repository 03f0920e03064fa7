//! # Domain Types
//!
//! Core domain enums used throughout Cedar POS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Currency     │   │   EntryMode     │   │     Tender      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Usd            │   │  Quantity       │   │  CashUsd        │       │
//! │  │  Lbp            │   │  Usd            │   │  CashLbp        │       │
//! │  └─────────────────┘   │  Lbp            │   │  Card           │       │
//! │                        │  Idle           │   └─────────────────┘       │
//! │  ┌─────────────────┐   └─────────────────┘   ┌─────────────────┐       │
//! │  │   OrderType     │   ┌─────────────────┐   │ DuplicateChoice │       │
//! │  │  ─────────────  │   │   OrderStatus   │   │  ─────────────  │       │
//! │  │  DineIn         │   │  ─────────────  │   │  Add            │       │
//! │  │  TakeAway (dflt)│   │  New (default)  │   │  Set            │       │
//! │  │  Delivery       │   │  Held / Voided  │   │  Cancel         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Currency
// =============================================================================

/// The two currencies the terminal handles.
///
/// USD is the pricing currency (catalog prices, order totals); LBP is the
/// local tender currency, derived from USD via the exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places).
    Usd,
    /// Lebanese Pound (whole pounds only at display granularity).
    Lbp,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Lbp => write!(f, "LBP"),
        }
    }
}

// =============================================================================
// Entry Mode
// =============================================================================

/// What kind of value the numpad is currently composing.
///
/// The mode is both a display concern (how the raw string is formatted) and
/// the routing key into the validation rules table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// A product quantity (integer, 1..=9999).
    Quantity,
    /// A USD amount (two decimal places).
    Usd,
    /// An LBP amount (integer pounds).
    Lbp,
    /// No specific value kind selected yet.
    Idle,
}

impl EntryMode {
    /// The entry mode used when composing an amount in `currency`.
    #[inline]
    pub const fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::Usd => EntryMode::Usd,
            Currency::Lbp => EntryMode::Lbp,
        }
    }
}

impl Default for EntryMode {
    fn default() -> Self {
        EntryMode::Idle
    }
}

// =============================================================================
// Order Type
// =============================================================================

/// How the order will be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Eat on premises.
    DineIn,
    /// Counter pickup.
    TakeAway,
    /// Delivered to the customer.
    Delivery,
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::TakeAway
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// The core only ever transitions through `New`; `Held` and `Voided` exist
/// for the hold/void buttons, which are presentation stubs with no persisted
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is being built (the only state the core transitions through).
    New,
    /// Parked for later recall (UI stub).
    Held,
    /// Cancelled (UI stub).
    Voided,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::New
    }
}

// =============================================================================
// Tender
// =============================================================================

/// A payment method/currency for settling an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tender {
    /// Cash in US dollars.
    CashUsd,
    /// Cash in Lebanese pounds.
    CashLbp,
    /// Card terminal (charged in USD).
    Card,
}

impl Tender {
    /// The entry mode whose validation rule governs amounts for this tender.
    #[inline]
    pub const fn entry_mode(&self) -> EntryMode {
        match self {
            Tender::CashUsd | Tender::Card => EntryMode::Usd,
            Tender::CashLbp => EntryMode::Lbp,
        }
    }

    /// The currency the tendered amount is denominated in.
    #[inline]
    pub const fn currency(&self) -> Currency {
        match self {
            Tender::CashUsd | Tender::Card => Currency::Usd,
            Tender::CashLbp => Currency::Lbp,
        }
    }
}

// =============================================================================
// Duplicate Choice
// =============================================================================

/// The cashier's answer to the "item already in order" dialog.
///
/// Raised when a product is pressed with a pending numpad quantity and the
/// product already has a line in the order. The order must never be silently
/// stacked or overwritten without this disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateChoice {
    /// Add the entered quantity to the existing line.
    Add,
    /// Replace the existing line's quantity with the entered one.
    Set,
    /// Leave the order unchanged.
    Cancel,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(OrderType::default(), OrderType::TakeAway);
        assert_eq!(OrderStatus::default(), OrderStatus::New);
        assert_eq!(EntryMode::default(), EntryMode::Idle);
    }

    #[test]
    fn test_tender_routing() {
        assert_eq!(Tender::CashUsd.entry_mode(), EntryMode::Usd);
        assert_eq!(Tender::Card.entry_mode(), EntryMode::Usd);
        assert_eq!(Tender::CashLbp.entry_mode(), EntryMode::Lbp);
        assert_eq!(Tender::CashLbp.currency(), Currency::Lbp);
    }

    #[test]
    fn test_mode_for_currency() {
        assert_eq!(EntryMode::for_currency(Currency::Usd), EntryMode::Usd);
        assert_eq!(EntryMode::for_currency(Currency::Lbp), EntryMode::Lbp);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Lbp.to_string(), "LBP");
    }
}
