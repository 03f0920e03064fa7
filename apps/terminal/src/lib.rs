//! # cedar-terminal: POS Terminal Session Application
//!
//! The thin orchestration layer between the GUI shell and cedar-core.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cedar-terminal                                   │
//! │                                                                         │
//! │  1. Load ConfigState (defaults + CEDAR_* env overrides)                │
//! │  2. Construct the collaborator services explicitly                     │
//! │     (catalog, credential store, exchange-rate source)                  │
//! │  3. Gate entry through one credential check                            │
//! │  4. Own the PosSession and expose plain data to the shell              │
//! │                                                                         │
//! │  There are no lazy singletons: everything is built once here and       │
//! │  passed down by reference, with lifecycle tied to this session.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod guard;
pub mod services;
pub mod session;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use session::{PosSession, ProductPress, TenderPress};
pub use state::{ConfigState, SessionState};

use std::sync::Arc;

use tracing::info;

use cedar_core::{Currency, DuplicateChoice, EntryMode, ExchangeRate, Preset, Tender};
use services::{CredentialStore, FixedRateSource, StaticCatalog};

/// Runs a scripted demo session against the seeded services and prints the
/// resulting order snapshot as JSON.
///
/// This is the smoke path used without a GUI shell attached; every call it
/// makes is exactly what the shell's signal handlers invoke.
pub fn run() -> Result<(), ApiError> {
    // Scripted taps arrive far faster than any physical double-tap; the
    // button guard would absorb them, so the demo runs without a window.
    let config = ConfigState {
        button_protect_ms: 0,
        ..ConfigState::from_env()
    };
    info!(store = %config.store_name, "starting terminal");

    let catalog = Arc::new(StaticCatalog::demo_menu());
    let credentials = CredentialStore::demo_users();
    let rates = FixedRateSource::new(
        ExchangeRate::from_millis(config.default_rate_millis)
            .map_err(|e| ApiError::validation(e.to_string()))?,
    );

    let session = PosSession::sign_in("1001", "4321", &credentials, catalog, &rates, &config)?;
    let state = SessionState::new(session);

    // Tap two products, one via a numpad quantity.
    state.with_session_mut(|s| s.product_pressed("Coffee").map(|_| ()))?;
    state.with_session_mut(|s| {
        s.set_entry_mode(EntryMode::Quantity);
        s.key_digit(3);
        s.product_pressed("Manakish Zaatar").map(|_| ())
    })?;

    // Re-tap Coffee with a pending quantity: the duplicate dialog fires.
    state.with_session_mut(|s| {
        s.set_entry_mode(EntryMode::Quantity);
        s.key_digit(2);
        s.product_pressed("Coffee").map(|_| ())
    })?;
    state.with_session_mut(|s| s.resolve_duplicate(DuplicateChoice::Add).map(|_| ()))?;

    // Settle in LBP banknotes.
    let receipt = state.with_session_mut(|s| {
        for amount in [100_000, 100_000, 100_000, 100_000, 100_000, 50_000] {
            s.preset_pressed(Preset {
                currency: Currency::Lbp,
                amount,
            });
        }
        s.tender_pressed(Tender::CashLbp)
    })?;

    let summary = state.with_session(|s| s.summary());
    let totals = state.with_session(|s| s.totals_view());

    println!(
        "{}",
        serde_json::json!({
            "order": summary,
            "totals": totals,
            "payment": receipt,
        })
    );

    Ok(())
}
