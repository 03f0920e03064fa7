//! # Order Aggregate
//!
//! The in-progress transaction: an ordered collection of line items keyed by
//! product name.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  Cashier Action           Session Call            Order Change          │
//! │  ──────────────           ────────────            ────────────          │
//! │                                                                         │
//! │  Tap Product ────────────► add_item() ──────────► merge or push line   │
//! │                                                                         │
//! │  Edit Quantity ──────────► update_quantity() ───► set qty / remove @0  │
//! │                                                                         │
//! │  Tap Remove ─────────────► remove_item() ───────► line removed         │
//! │                                                                         │
//! │  Tap Clear (confirmed) ──► clear() ─────────────► items emptied        │
//! │                                                                         │
//! │  Display refresh ────────► summary() ───────────► (read-only snapshot) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product name; adding an existing name increments
//!   its quantity instead of duplicating
//! - Insertion order is display order
//! - `total() == Σ line_total()`, exact integer math, never negative for
//!   non-negative inputs
//! - Quantities are floored at 0; a quantity update to 0 removes the line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderStatus, OrderType};
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_ITEMS};

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product within an order.
///
/// The unit price is frozen at the moment the product is first added, so the
/// order keeps displaying consistent math even if the catalog price changes
/// mid-session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name — the unique key within an order.
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity on this line (≥ 0).
    pub quantity: i64,

    /// Per-unit discount (≥ 0, default 0). The discount-rule engine is out
    /// of scope; this is the plumbing the discount button will feed.
    pub per_unit_discount: Money,

    /// Free-form kitchen/cashier note.
    pub notes: Option<String>,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line; negative quantities are floored at 0.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity: quantity.max(0),
            per_unit_discount: Money::zero(),
            notes: None,
            added_at: Utc::now(),
        }
    }

    /// `unit_price × quantity`, before discount.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// `per_unit_discount × quantity`.
    pub fn discount_total(&self) -> Money {
        self.per_unit_discount.multiply_quantity(self.quantity)
    }

    /// `(unit_price − per_unit_discount) × quantity`, floored so an
    /// oversized discount can never drive a line negative.
    pub fn line_total(&self) -> Money {
        self.unit_price
            .saturating_sub(self.per_unit_discount)
            .multiply_quantity(self.quantity)
    }

    /// Increments the quantity.
    pub fn increment_quantity(&mut self, n: i64) {
        self.set_quantity(self.quantity + n);
    }

    /// Decrements the quantity, floored at 0 — never negative.
    pub fn decrement_quantity(&mut self, n: i64) {
        self.set_quantity(self.quantity - n);
    }

    /// Sets the quantity directly, floored at 0.
    pub fn set_quantity(&mut self, n: i64) {
        self.quantity = n.max(0);
    }

    /// Applies a per-unit discount (negative amounts are floored at 0).
    pub fn apply_discount(&mut self, amount: Money) {
        self.per_unit_discount = if amount.is_negative() {
            Money::zero()
        } else {
            amount
        };
    }

    /// Removes any per-unit discount.
    pub fn clear_discount(&mut self) {
        self.per_unit_discount = Money::zero();
    }
}

// =============================================================================
// Order
// =============================================================================

/// The current in-progress transaction.
#[derive(Debug, Clone)]
pub struct Order {
    /// Order identifier (UUID v4).
    pub id: String,

    /// Lines in insertion order (= display order).
    items: Vec<LineItem>,

    /// How the order will be fulfilled.
    pub order_type: OrderType,

    /// Order status; the core only transitions through `New`.
    pub status: OrderStatus,

    /// When the order was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            order_type: OrderType::default(),
            status: OrderStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// The lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Adds a product to the order, merging by name.
    ///
    /// ## Behavior
    /// - Name already present: quantity incremented by `qty`
    /// - Otherwise: a new line is appended with the given frozen price
    ///
    /// ## Returns
    /// The resulting line, or an error when a cap would be exceeded.
    pub fn add_item(&mut self, name: &str, unit_price: Money, qty: i64) -> CoreResult<&LineItem> {
        if let Some(idx) = self.items.iter().position(|i| i.name == name) {
            let new_qty = self.items[idx].quantity + qty;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            self.items[idx].set_quantity(new_qty);
            return Ok(&self.items[idx]);
        }

        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderFull {
                max: MAX_ORDER_ITEMS,
            });
        }
        if qty > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.items.push(LineItem::new(name, unit_price, qty));
        Ok(self.items.last().expect("line just pushed"))
    }

    /// Finds a line by product name. Linear scan: orders are small.
    pub fn find_by_name(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Removes a line by name. A missing name is a no-op, not an error.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|i| i.name != name);
    }

    /// Sets a line's quantity directly (not additive).
    ///
    /// A final quantity ≤ 0 removes the line entirely. An unknown name is
    /// an error: the edit came from a row that should exist.
    pub fn update_quantity(&mut self, name: &str, final_qty: i64) -> CoreResult<()> {
        if final_qty > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: final_qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        let Some(idx) = self.items.iter().position(|i| i.name == name) else {
            return Err(CoreError::ItemNotFound(name.to_string()));
        };

        if final_qty <= 0 {
            self.items.remove(idx);
        } else {
            self.items[idx].set_quantity(final_qty);
        }
        Ok(())
    }

    /// Empties the order.
    ///
    /// Destructive and irreversible within the session. The presentation
    /// layer MUST confirm with the cashier before calling this; the core
    /// performs no confirmation of its own.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Order total: sum of line totals, exact.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Whether the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only snapshot for the GUI shell.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id.clone(),
            order_type: self.order_type,
            status: self.status,
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            total_cents: self.total().cents(),
            items: self.items.iter().map(LineItemView::from).collect(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshot DTOs
// =============================================================================

/// One line as displayed, with derived totals precomputed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub discount_cents: i64,
    pub line_total_cents: i64,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        LineItemView {
            name: item.name.clone(),
            unit_price_cents: item.unit_price.cents(),
            quantity: item.quantity,
            discount_cents: item.per_unit_discount.cents(),
            line_total_cents: item.line_total().cents(),
        }
    }
}

/// Read-only order snapshot for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
    pub items: Vec<LineItemView>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item() {
        let mut order = Order::new();
        order.add_item("Espresso", Money::from_cents(250), 2).unwrap();

        assert_eq!(order.item_count(), 1);
        assert_eq!(order.total_quantity(), 2);
        assert_eq!(order.total().cents(), 500);
    }

    /// Merge invariant: any sequence of adds for one name collapses into a
    /// single line whose quantity is the sum of all quantities passed.
    #[test]
    fn test_merge_by_name() {
        let mut order = Order::new();
        let price = Money::from_cents(350);
        for qty in [1, 2, 3, 4] {
            order.add_item("Coffee", price, qty).unwrap();
        }

        assert_eq!(order.item_count(), 1);
        let line = order.find_by_name("Coffee").unwrap();
        assert_eq!(line.quantity, 10);
    }

    /// Adding "Coffee" at $3.50 twice (qty 1 each) yields one line,
    /// qty 2, total $7.00.
    #[test]
    fn test_two_taps_one_line() {
        let mut order = Order::new();
        let price = Money::from_cents(350);
        order.add_item("Coffee", price, 1).unwrap();
        order.add_item("Coffee", price, 1).unwrap();

        assert_eq!(order.item_count(), 1);
        let line = order.find_by_name("Coffee").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total().cents(), 700);
        assert_eq!(order.total().cents(), 700);
    }

    /// Repeated merges of a decimal-prone price never drift.
    #[test]
    fn test_total_exactness_under_repeated_merge() {
        let mut order = Order::new();
        let price = Money::from_cents(10); // $0.10
        for _ in 0..300 {
            order.add_item("Gum", price, 1).unwrap();
        }
        assert_eq!(order.total().cents(), 3000); // exactly $30.00
    }

    #[test]
    fn test_line_totals_with_discount() {
        let mut line = LineItem::new("Cake", Money::from_cents(500), 3);
        assert_eq!(line.subtotal().cents(), 1500);

        line.apply_discount(Money::from_cents(100));
        assert_eq!(line.discount_total().cents(), 300);
        assert_eq!(line.line_total().cents(), 1200); // (5.00 − 1.00) × 3

        // An oversized discount floors the line at zero.
        line.apply_discount(Money::from_cents(900));
        assert_eq!(line.line_total().cents(), 0);

        line.clear_discount();
        assert_eq!(line.line_total().cents(), 1500);
    }

    #[test]
    fn test_quantity_floors_at_zero() {
        let mut line = LineItem::new("Tea", Money::from_cents(200), 2);
        line.decrement_quantity(5);
        assert_eq!(line.quantity, 0);

        line.set_quantity(-10);
        assert_eq!(line.quantity, 0);

        let negative = LineItem::new("Tea", Money::from_cents(200), -3);
        assert_eq!(negative.quantity, 0);
    }

    #[test]
    fn test_update_quantity_sets_not_adds() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 2).unwrap();

        order.update_quantity("Coffee", 5).unwrap();
        assert_eq!(order.find_by_name("Coffee").unwrap().quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 2).unwrap();

        order.update_quantity("Coffee", 0).unwrap();
        assert!(order.find_by_name("Coffee").is_none());
        assert!(order.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_name_errors() {
        let mut order = Order::new();
        assert!(matches!(
            order.update_quantity("Ghost", 1),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 1).unwrap();
        order.remove_item("Ghost"); // silently does nothing
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_quantity_cap() {
        let mut order = Order::new();
        order
            .add_item("Coffee", Money::from_cents(350), 9999)
            .unwrap();
        assert!(matches!(
            order.add_item("Coffee", Money::from_cents(350), 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 2).unwrap();
        assert!(!order.is_empty());

        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.total().cents(), 0);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 1).unwrap();
        order.add_item("Cake", Money::from_cents(500), 1).unwrap();
        order.add_item("Coffee", Money::from_cents(350), 1).unwrap(); // merge

        let names: Vec<&str> = order.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Cake"]);
    }

    #[test]
    fn test_summary_snapshot() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 2).unwrap();

        let summary = order.summary();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.total_cents, 700);
        assert_eq!(summary.status, OrderStatus::New);
        assert_eq!(summary.order_type, OrderType::TakeAway);
        assert_eq!(summary.items[0].line_total_cents, 700);
    }

    /// DTOs cross to the GUI shell as camelCase JSON.
    #[test]
    fn test_summary_serializes_camel_case() {
        let mut order = Order::new();
        order.add_item("Coffee", Money::from_cents(350), 1).unwrap();

        let json = serde_json::to_value(order.summary()).unwrap();
        assert!(json.get("totalCents").is_some());
        assert!(json.get("itemCount").is_some());
        assert!(json["items"][0].get("unitPriceCents").is_some());
        assert_eq!(json["orderType"], "take_away");
    }
}
