//! # POS Session (Order Coordination Controller)
//!
//! The façade gluing numeric entry, presets, validation, and the order
//! together. It decides whether a confirmed numpad value is a product
//! quantity or a payment amount, runs the "item already exists" decision
//! protocol, and republishes totals after every mutation.
//!
//! ## Dispatch Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PosSession Dispatch                                │
//! │                                                                         │
//! │  Product tap ──┬── guarded? ───────────────► suppressed (debounce)     │
//! │                ├── no pending value ───────► add qty 1                 │
//! │                └── pending value                                        │
//! │                      ├── invalid as qty ───► message, entry cleared    │
//! │                      ├── name in order ────► duplicate decision        │
//! │                      └── new name ─────────► add qty n                 │
//! │                                                                         │
//! │  Tender tap ───┬── nothing entered ────────► "enter an amount first"   │
//! │                ├── invalid for tender ─────► message, entry cleared    │
//! │                └── valid ──────────────────► stub payment + change     │
//! │                                                                         │
//! │  Every mutation ► totals recomputed in both currencies                 │
//! │  Every success ─► search cleared, entry reset, button guard engaged    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No new business rules live here - the session only routes between the
//! core's components and converts failures to user-visible messages.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use cedar_core::{
    format, validation, CoreError, Currency, DuplicateChoice, EntryMode, ExchangeRate, Money,
    NumericEntry, Order, OrderSummary, OrderTotals, OrderType, Preset, PresetButton, PresetPanel,
    Tender,
};

use crate::error::ApiError;
use crate::guard::ButtonGuard;
use crate::services::{Catalog, CredentialStore, RateSource};
use crate::state::ConfigState;

// =============================================================================
// Response DTOs
// =============================================================================

/// Outcome of a product button activation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductPress {
    /// The product was added; here is the updated order.
    Added { summary: OrderSummary },

    /// The product already has a line and a quantity was pending: the shell
    /// must show the add/set/cancel dialog and call `resolve_duplicate`.
    NeedsDecision {
        name: String,
        #[serde(rename = "existingQty")]
        existing_qty: i64,
        #[serde(rename = "enteredQty")]
        entered_qty: i64,
    },

    /// The tap landed inside the button protection window and was absorbed.
    Suppressed,
}

/// Outcome of a tender button activation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TenderPress {
    /// Payment accepted (stub - no gateway). Totals are republished.
    Paid { receipt: PaymentReceipt },

    /// The tap landed inside the button protection window and was absorbed.
    Suppressed,
}

/// The stubbed payment record, with change computed in the tender currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub tender: Tender,
    pub currency: Currency,
    /// Amount tendered, in the tender currency's minor units.
    pub amount_minor: i64,
    /// Order total due, in the tender currency's minor units.
    pub total_due_minor: i64,
    /// Change owed to the customer (0 when underpaid).
    pub change_minor: i64,
    /// Remainder still due (0 when fully paid).
    pub remaining_minor: i64,
}

/// The numeric entry as the shell displays it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub display: String,
    pub mode: EntryMode,
    pub locked_currency: Option<Currency>,
}

/// Order totals in both currencies, pre-formatted for the totals strip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub usd_cents: i64,
    pub lbp: i64,
    pub usd_display: String,
    pub lbp_display: String,
}

/// A pending duplicate-quantity decision.
#[derive(Debug, Clone)]
struct PendingDuplicate {
    name: String,
    qty: i64,
}

// =============================================================================
// PosSession
// =============================================================================

/// One signed-in POS session: the order, the numeric entry, and the
/// coordination logic between them.
///
/// Owned exclusively by the terminal for the lifetime of one session; all
/// operations are short synchronous calls triggered by single UI events.
pub struct PosSession {
    cashier_id: String,
    order: Order,
    entry: NumericEntry,
    panel: PresetPanel,
    rate: ExchangeRate,
    totals: OrderTotals,
    search_text: String,
    pending_decision: Option<PendingDuplicate>,
    guard: ButtonGuard,
    catalog: Arc<dyn Catalog>,
    max_search_len: usize,
}

impl PosSession {
    /// Authenticates the cashier and opens a session.
    ///
    /// The single credential check gates entry; identity is not re-validated
    /// afterward. The exchange rate is polled from the source once here and
    /// again only on explicit refresh.
    pub fn sign_in(
        user_id: &str,
        pin: &str,
        credentials: &CredentialStore,
        catalog: Arc<dyn Catalog>,
        rates: &dyn RateSource,
        config: &ConfigState,
    ) -> Result<PosSession, ApiError> {
        if !credentials.authenticate(user_id, pin) {
            warn!(user_id = %user_id, "sign-in rejected");
            return Err(ApiError::unauthorized("invalid user id or PIN"));
        }

        let rate = rates.current();
        info!(user_id = %user_id, rate_millis = rate.millis(), "session opened");

        Ok(PosSession {
            cashier_id: user_id.to_string(),
            order: Order::new(),
            entry: NumericEntry::new(),
            panel: PresetPanel,
            rate,
            totals: OrderTotals::zero(),
            search_text: String::new(),
            pending_decision: None,
            guard: ButtonGuard::new(Duration::from_millis(config.button_protect_ms)),
            catalog,
            max_search_len: config.max_search_len,
        })
    }

    /// The signed-in cashier.
    pub fn cashier_id(&self) -> &str {
        &self.cashier_id
    }

    // -------------------------------------------------------------------------
    // Product dispatch
    // -------------------------------------------------------------------------

    /// Handles a product button activation.
    ///
    /// With a pending numpad value the value is validated as a quantity; a
    /// failure surfaces the reason and clears the pending entry. A valid
    /// quantity against an existing line triggers the duplicate-decision
    /// protocol instead of silently stacking or overwriting. Without a
    /// pending value the product is added with quantity 1 (tap to add one).
    pub fn product_pressed(&mut self, name: &str) -> Result<ProductPress, ApiError> {
        debug!(product = %name, "product pressed");

        if self.guard.is_protected(name) {
            debug!(product = %name, "tap absorbed by button protection");
            return Ok(ProductPress::Suppressed);
        }

        let price = self
            .catalog
            .price_of(name)
            .ok_or_else(|| ApiError::from(CoreError::UnknownProduct(name.to_string())))?;

        if !self.entry.has_value() {
            self.order.add_item(name, price, 1)?;
            self.finish_action(name);
            return Ok(ProductPress::Added {
                summary: self.order.summary(),
            });
        }

        let raw = self.entry.confirm().to_string();
        let qty = match validation::parse_minor(EntryMode::Quantity, &raw) {
            Ok(qty) => qty,
            Err(reason) => {
                // Surface the message and abort, clearing the pending state.
                self.entry.set_mode(EntryMode::Idle);
                return Err(ApiError::from(CoreError::Validation(reason)));
            }
        };

        if let Some(existing) = self.order.find_by_name(name) {
            let existing_qty = existing.quantity;
            self.pending_decision = Some(PendingDuplicate {
                name: name.to_string(),
                qty,
            });
            return Ok(ProductPress::NeedsDecision {
                name: name.to_string(),
                existing_qty,
                entered_qty: qty,
            });
        }

        if let Err(err) = self.order.add_item(name, price, qty) {
            self.entry.set_mode(EntryMode::Idle);
            return Err(err.into());
        }
        self.finish_action(name);
        Ok(ProductPress::Added {
            summary: self.order.summary(),
        })
    }

    /// Applies the cashier's answer to the duplicate-quantity dialog.
    ///
    /// Add sums the quantities, Set replaces, Cancel changes nothing - and
    /// regardless of the choice (or of a cap error on Add), the pending
    /// numeric entry is cleared.
    pub fn resolve_duplicate(&mut self, choice: DuplicateChoice) -> Result<OrderSummary, ApiError> {
        let pending = self
            .pending_decision
            .take()
            .ok_or_else(|| ApiError::from(CoreError::NoPendingDecision))?;
        debug!(product = %pending.name, qty = pending.qty, ?choice, "duplicate decision");

        let result = self.apply_duplicate_choice(&pending, choice);

        self.entry.set_mode(EntryMode::Idle);
        self.recompute_totals();

        match result {
            Ok(mutated) => {
                if mutated {
                    self.search_text.clear();
                    self.guard.engage(&pending.name);
                }
                Ok(self.order.summary())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply_duplicate_choice(
        &mut self,
        pending: &PendingDuplicate,
        choice: DuplicateChoice,
    ) -> Result<bool, CoreError> {
        match choice {
            DuplicateChoice::Add => {
                let price = self
                    .order
                    .find_by_name(&pending.name)
                    .map(|line| line.unit_price)
                    .ok_or_else(|| CoreError::ItemNotFound(pending.name.clone()))?;
                self.order.add_item(&pending.name, price, pending.qty)?;
                Ok(true)
            }
            DuplicateChoice::Set => {
                self.order.update_quantity(&pending.name, pending.qty)?;
                Ok(true)
            }
            DuplicateChoice::Cancel => Ok(false),
        }
    }

    // -------------------------------------------------------------------------
    // Payment dispatch
    // -------------------------------------------------------------------------

    /// Handles a payment tender activation.
    ///
    /// Requires a pending numpad value; validates it against the tender's
    /// currency mode; on success the payment is processed as a stub (no
    /// gateway) and the entry is fully cleared, re-enabling both preset
    /// rows. On failure the reason is surfaced and the entry cleared.
    pub fn tender_pressed(&mut self, tender: Tender) -> Result<TenderPress, ApiError> {
        let key = tender_key(tender);
        debug!(tender = key, "tender pressed");

        if self.guard.is_protected(key) {
            debug!(tender = key, "tap absorbed by button protection");
            return Ok(TenderPress::Suppressed);
        }

        if !self.entry.has_value() {
            return Err(CoreError::AmountRequired.into());
        }

        let raw = self.entry.confirm().to_string();
        if let Err(reason) = validation::validate_tender(tender, &raw) {
            self.entry.set_mode(EntryMode::Idle);
            return Err(ApiError::from(CoreError::Validation(reason)));
        }
        let amount = validation::parse_minor(tender.entry_mode(), &raw)
            .map_err(|reason| ApiError::from(CoreError::Validation(reason)))?;

        let total_due = match tender.currency() {
            Currency::Usd => self.order.total().cents(),
            Currency::Lbp => self.rate.convert(self.order.total()),
        };

        let receipt = PaymentReceipt {
            tender,
            currency: tender.currency(),
            amount_minor: amount,
            total_due_minor: total_due,
            change_minor: (amount - total_due).max(0),
            remaining_minor: (total_due - amount).max(0),
        };

        info!(
            tender = key,
            amount = amount,
            total_due = total_due,
            change = receipt.change_minor,
            "payment processed (stub)"
        );

        self.finish_action(key);
        Ok(TenderPress::Paid { receipt })
    }

    /// The discount button. A stub: the discount-rule engine is out of
    /// scope, so this only logs and returns the unchanged order.
    pub fn discount_pressed(&self) -> OrderSummary {
        info!("discount action is a stub; order unchanged");
        self.order.summary()
    }

    // -------------------------------------------------------------------------
    // Numeric entry & presets
    // -------------------------------------------------------------------------

    /// Keypad digit press.
    pub fn key_digit(&mut self, digit: u8) -> EntryView {
        self.entry.press_digit(digit);
        self.entry_view()
    }

    /// Keypad decimal-point press.
    pub fn key_decimal(&mut self) -> EntryView {
        self.entry.press_decimal();
        self.entry_view()
    }

    /// Keypad backspace press.
    pub fn key_backspace(&mut self) -> EntryView {
        self.entry.press_backspace();
        self.entry_view()
    }

    /// Keypad C press: resets the value, keeps the currency lock.
    pub fn key_clear(&mut self) -> EntryView {
        self.entry.press_clear();
        self.entry_view()
    }

    /// Full clear: resets the value and releases the currency lock, so both
    /// preset rows re-enable.
    pub fn clear_entry(&mut self) -> EntryView {
        self.entry.clear_all();
        self.entry_view()
    }

    /// Binds the numpad to a value kind (quantity, USD, LBP).
    pub fn set_entry_mode(&mut self, mode: EntryMode) -> EntryView {
        self.entry.set_mode(mode);
        self.entry_view()
    }

    /// Preset denomination press. A preset whose currency is locked out is
    /// ignored here exactly as its disabled button would be in the shell.
    pub fn preset_pressed(&mut self, preset: Preset) -> EntryView {
        if self.panel.is_enabled(&self.entry, &preset) {
            self.entry.apply_preset(preset);
        } else {
            debug!(?preset, "preset ignored: other currency is locked");
        }
        self.entry_view()
    }

    /// The formatted numeric entry state.
    pub fn entry_view(&self) -> EntryView {
        EntryView {
            display: self.entry.display(),
            mode: self.entry.mode(),
            locked_currency: self.entry.locked_currency(),
        }
    }

    /// Enable/disable state for every preset button.
    pub fn preset_buttons(&self) -> Vec<PresetButton> {
        self.panel.buttons(&self.entry)
    }

    // -------------------------------------------------------------------------
    // Search & catalog
    // -------------------------------------------------------------------------

    /// Updates the search/filter text and returns the matching products.
    pub fn set_search(&mut self, text: &str) -> Result<Vec<String>, ApiError> {
        let text = text.trim();
        if text.len() > self.max_search_len {
            return Err(ApiError::validation("search text too long"));
        }
        self.search_text = text.to_string();
        Ok(self.catalog.filter(&self.search_text))
    }

    /// Products matching the current search text.
    pub fn search_results(&self) -> Vec<String> {
        self.catalog.filter(&self.search_text)
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Catalog categories for the grid tabs.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Products in one category.
    pub fn products_in(&self, category: &str) -> Vec<String> {
        self.catalog.products_in(category)
    }

    // -------------------------------------------------------------------------
    // Order & totals
    // -------------------------------------------------------------------------

    /// Read-only order snapshot.
    pub fn summary(&self) -> OrderSummary {
        self.order.summary()
    }

    /// Sets how the order will be fulfilled.
    pub fn set_order_type(&mut self, order_type: OrderType) -> OrderSummary {
        self.order.order_type = order_type;
        self.order.summary()
    }

    /// Removes a line. A missing name is a no-op.
    pub fn remove_line(&mut self, name: &str) -> OrderSummary {
        self.order.remove_item(name);
        self.recompute_totals();
        self.order.summary()
    }

    /// Sets a line's quantity directly; 0 removes the line.
    pub fn update_line_quantity(&mut self, name: &str, qty: i64) -> Result<OrderSummary, ApiError> {
        self.order.update_quantity(name, qty)?;
        self.recompute_totals();
        Ok(self.order.summary())
    }

    /// Empties the order.
    ///
    /// Destructive and irreversible within the session: the shell MUST have
    /// shown its yes/no confirmation dialog before calling this.
    pub fn clear_order(&mut self) -> OrderSummary {
        info!(order_id = %self.order.id, "order cleared");
        self.order.clear();
        self.recompute_totals();
        self.order.summary()
    }

    /// The current totals in both currencies.
    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    /// Totals pre-formatted for the totals strip.
    pub fn totals_view(&self) -> TotalsView {
        TotalsView {
            usd_cents: self.totals.usd_cents,
            lbp: self.totals.lbp,
            usd_display: format::format_usd(Money::from_cents(self.totals.usd_cents)),
            lbp_display: format::format_lbp(self.totals.lbp),
        }
    }

    /// Installs a new exchange rate and republishes totals.
    pub fn update_exchange_rate(&mut self, rate: ExchangeRate) {
        info!(rate_millis = rate.millis(), "exchange rate updated");
        self.rate = rate;
        self.recompute_totals();
    }

    /// Re-polls the rate source.
    pub fn refresh_rate(&mut self, rates: &dyn RateSource) {
        self.update_exchange_rate(rates.current());
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Post-success cleanup shared by product adds and payments: clear the
    /// search text, reset the numeric entry, engage the button guard, and
    /// republish totals.
    fn finish_action(&mut self, key: &str) {
        self.search_text.clear();
        self.entry.set_mode(EntryMode::Idle);
        self.guard.engage(key);
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        self.totals = OrderTotals::compute(self.order.total(), self.rate);
    }
}

impl fmt::Debug for PosSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosSession")
            .field("cashier_id", &self.cashier_id)
            .field("order_id", &self.order.id)
            .field("items", &self.order.item_count())
            .field("entry", &self.entry)
            .finish()
    }
}

/// Stable guard key for a tender button.
fn tender_key(tender: Tender) -> &'static str {
    match tender {
        Tender::CashUsd => "tender:cash_usd",
        Tender::CashLbp => "tender:cash_lbp",
        Tender::Card => "tender:card",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FixedRateSource, StaticCatalog};

    /// A session with the demo catalog, 90,000 LBP/USD, and no debounce
    /// window (so scripted taps are not absorbed).
    fn test_session() -> PosSession {
        session_with_protect_ms(0)
    }

    fn session_with_protect_ms(ms: u64) -> PosSession {
        let config = ConfigState {
            button_protect_ms: ms,
            ..ConfigState::default()
        };
        let rates = FixedRateSource::new(ExchangeRate::from_pounds(90_000).unwrap());
        PosSession::sign_in(
            "1001",
            "4321",
            &CredentialStore::demo_users(),
            Arc::new(StaticCatalog::demo_menu()),
            &rates,
            &config,
        )
        .unwrap()
    }

    fn type_digits(session: &mut PosSession, digits: &[u8]) {
        for &d in digits {
            session.key_digit(d);
        }
    }

    #[test]
    fn test_sign_in_gate() {
        let config = ConfigState::default();
        let rates = FixedRateSource::new(ExchangeRate::from_pounds(90_000).unwrap());
        let err = PosSession::sign_in(
            "1001",
            "0000",
            &CredentialStore::demo_users(),
            Arc::new(StaticCatalog::demo_menu()),
            &rates,
            &config,
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Unauthorized);
    }

    #[test]
    fn test_tap_to_add_one() {
        let mut session = test_session();
        let press = session.product_pressed("Coffee").unwrap();

        match press {
            ProductPress::Added { summary } => {
                assert_eq!(summary.item_count, 1);
                assert_eq!(summary.items[0].quantity, 1);
                assert_eq!(summary.total_cents, 350);
            }
            other => panic!("expected Added, got {other:?}"),
        }
    }

    /// Enter quantity "3", tap "Coffee" (not yet in the order): one line,
    /// qty 3, total $10.50, numeric entry reset to "0".
    #[test]
    fn test_numpad_quantity_then_product() {
        let mut session = test_session();
        session.set_entry_mode(EntryMode::Quantity);
        type_digits(&mut session, &[3]);

        let press = session.product_pressed("Coffee").unwrap();
        match press {
            ProductPress::Added { summary } => {
                assert_eq!(summary.items[0].quantity, 3);
                assert_eq!(summary.total_cents, 1050);
            }
            other => panic!("expected Added, got {other:?}"),
        }
        assert_eq!(session.entry_view().display, "0");
        assert!(session.entry_view().locked_currency.is_none());
    }

    #[test]
    fn test_invalid_quantity_surfaces_and_clears() {
        let mut session = test_session();
        session.set_entry_mode(EntryMode::Quantity);
        type_digits(&mut session, &[1, 0, 0, 0, 0]); // 10000 > 9999

        let err = session.product_pressed("Coffee").unwrap_err();
        assert_eq!(err.message, "cannot exceed 9999");

        // Entry cleared, order untouched.
        assert_eq!(session.entry_view().display, "0");
        assert!(session.summary().items.is_empty());
    }

    /// Order has Coffee qty 2; enter "3" and tap Coffee: the decision
    /// protocol triggers; Add → 5, Set → 3, Cancel → 2; every choice clears
    /// the pending entry.
    #[test]
    fn test_duplicate_decision_protocol() {
        for (choice, expected_qty) in [
            (DuplicateChoice::Add, 5),
            (DuplicateChoice::Set, 3),
            (DuplicateChoice::Cancel, 2),
        ] {
            let mut session = test_session();
            session.set_entry_mode(EntryMode::Quantity);
            type_digits(&mut session, &[2]);
            session.product_pressed("Coffee").unwrap();

            session.set_entry_mode(EntryMode::Quantity);
            type_digits(&mut session, &[3]);
            let press = session.product_pressed("Coffee").unwrap();
            match press {
                ProductPress::NeedsDecision {
                    existing_qty,
                    entered_qty,
                    ..
                } => {
                    assert_eq!(existing_qty, 2);
                    assert_eq!(entered_qty, 3);
                }
                other => panic!("expected NeedsDecision, got {other:?}"),
            }

            let summary = session.resolve_duplicate(choice).unwrap();
            assert_eq!(summary.items[0].quantity, expected_qty, "{choice:?}");
            assert_eq!(session.entry_view().display, "0", "{choice:?}");
        }
    }

    #[test]
    fn test_resolve_without_pending_errors() {
        let mut session = test_session();
        let err = session.resolve_duplicate(DuplicateChoice::Add).unwrap_err();
        assert_eq!(err.message, "no duplicate decision is pending");
    }

    #[test]
    fn test_unknown_product() {
        let mut session = test_session();
        let err = session.product_pressed("Unobtainium").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_double_tap_is_absorbed() {
        let mut session = session_with_protect_ms(500);
        let first = session.product_pressed("Coffee").unwrap();
        assert!(matches!(first, ProductPress::Added { .. }));

        // The second activation of the same physical tap sequence.
        let second = session.product_pressed("Coffee").unwrap();
        assert!(matches!(second, ProductPress::Suppressed));

        // A different button is unaffected.
        let other = session.product_pressed("Tea").unwrap();
        assert!(matches!(other, ProductPress::Added { .. }));
    }

    #[test]
    fn test_totals_republished_in_both_currencies() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap(); // $3.50

        let totals = session.totals();
        assert_eq!(totals.usd_cents, 350);
        assert_eq!(totals.lbp, 315_000); // 3.50 × 90,000

        let view = session.totals_view();
        assert_eq!(view.usd_display, "$3.50");
        assert_eq!(view.lbp_display, "315,000 LBP");

        session.remove_line("Coffee");
        assert_eq!(session.totals().usd_cents, 0);
        assert_eq!(session.totals().lbp, 0);
    }

    #[test]
    fn test_rate_update_recomputes() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap();

        session.update_exchange_rate(ExchangeRate::from_millis(89_999_500).unwrap());
        // $3.50 × 89,999.5 = 314,998.25 → truncates to 314,998
        assert_eq!(session.totals().lbp, 314_998);
    }

    #[test]
    fn test_tender_requires_amount() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap();

        let err = session.tender_pressed(Tender::CashUsd).unwrap_err();
        assert_eq!(err.message, "enter an amount first");
        // No state mutation: the order is untouched.
        assert_eq!(session.summary().total_cents, 350);
    }

    #[test]
    fn test_cash_usd_payment_with_change() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap(); // $3.50 due

        session.set_entry_mode(EntryMode::Usd);
        type_digits(&mut session, &[5]);
        let press = session.tender_pressed(Tender::CashUsd).unwrap();

        match press {
            TenderPress::Paid { receipt } => {
                assert_eq!(receipt.currency, Currency::Usd);
                assert_eq!(receipt.amount_minor, 500);
                assert_eq!(receipt.total_due_minor, 350);
                assert_eq!(receipt.change_minor, 150);
                assert_eq!(receipt.remaining_minor, 0);
            }
            other => panic!("expected Paid, got {other:?}"),
        }

        // Entry fully cleared: both preset rows re-enabled.
        assert_eq!(session.entry_view().display, "0");
        assert!(session.preset_buttons().iter().all(|b| b.enabled));
    }

    #[test]
    fn test_cash_lbp_payment_via_presets() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap(); // 315,000 LBP due

        for amount in [100_000, 100_000, 100_000, 20_000] {
            session.preset_pressed(Preset {
                currency: Currency::Lbp,
                amount,
            });
        }
        assert_eq!(session.entry_view().display, "320,000");

        let press = session.tender_pressed(Tender::CashLbp).unwrap();
        match press {
            TenderPress::Paid { receipt } => {
                assert_eq!(receipt.amount_minor, 320_000);
                assert_eq!(receipt.total_due_minor, 315_000);
                assert_eq!(receipt.change_minor, 5_000);
            }
            other => panic!("expected Paid, got {other:?}"),
        }
    }

    #[test]
    fn test_lbp_tender_rejects_decimals() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap();

        session.set_entry_mode(EntryMode::Usd);
        type_digits(&mut session, &[1, 2]);
        session.key_decimal();
        type_digits(&mut session, &[5]);

        let err = session.tender_pressed(Tender::CashLbp).unwrap_err();
        assert_eq!(err.message, "decimals not allowed");
        // Failure clears the entry; nothing else changed.
        assert_eq!(session.entry_view().display, "0");
    }

    /// USD presets $20 then $5 accumulate to 25; the LBP row is disabled by
    /// the lock. "25" would PASS the LBP rule, which is exactly why
    /// cross-currency correctness is enforced by preset enablement rather
    /// than by the validator.
    #[test]
    fn test_preset_lock_is_the_currency_barrier() {
        let mut session = test_session();
        session.preset_pressed(Preset {
            currency: Currency::Usd,
            amount: 2_000,
        });
        session.preset_pressed(Preset {
            currency: Currency::Usd,
            amount: 500,
        });

        let view = session.entry_view();
        assert_eq!(view.display, "25.00");
        assert_eq!(view.locked_currency, Some(Currency::Usd));

        // An LBP preset tap is ignored, like its disabled button.
        session.preset_pressed(Preset {
            currency: Currency::Lbp,
            amount: 1_000,
        });
        assert_eq!(session.entry_view().display, "25.00");

        // The raw value alone would satisfy the LBP rule.
        assert!(cedar_core::validation::validate_tender(Tender::CashLbp, "25").is_ok());
    }

    #[test]
    fn test_keypad_clear_keeps_lock() {
        let mut session = test_session();
        session.preset_pressed(Preset {
            currency: Currency::Usd,
            amount: 500,
        });
        session.key_clear();
        assert_eq!(session.entry_view().locked_currency, Some(Currency::Usd));

        session.clear_entry();
        assert_eq!(session.entry_view().locked_currency, None);
    }

    #[test]
    fn test_search_cleared_after_add() {
        let mut session = test_session();
        let hits = session.set_search("coffee").unwrap();
        assert_eq!(hits.len(), 2); // Coffee, Turkish Coffee

        session.product_pressed("Coffee").unwrap();
        assert_eq!(session.search_text(), "");
    }

    #[test]
    fn test_search_length_bound() {
        let mut session = test_session();
        let long = "x".repeat(101);
        assert!(session.set_search(&long).is_err());
    }

    #[test]
    fn test_update_line_and_clear_order() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap();
        session.product_pressed("Cake").unwrap();

        let summary = session.update_line_quantity("Coffee", 4).unwrap();
        assert_eq!(summary.total_cents, 4 * 350 + 500);

        let summary = session.update_line_quantity("Cake", 0).unwrap();
        assert_eq!(summary.item_count, 1);

        let summary = session.clear_order();
        assert!(summary.items.is_empty());
        assert_eq!(session.totals().lbp, 0);
    }

    #[test]
    fn test_discount_is_a_stub() {
        let mut session = test_session();
        session.product_pressed("Coffee").unwrap();
        let before = session.summary();
        let after = session.discount_pressed();
        assert_eq!(before.total_cents, after.total_cents);
    }

    #[test]
    fn test_order_type_switch() {
        let mut session = test_session();
        let summary = session.set_order_type(OrderType::DineIn);
        assert_eq!(summary.order_type, OrderType::DineIn);
    }
}
