//! # Preset Amount Selector
//!
//! Fixed banknote denominations that feed the numeric entry in one tap.
//!
//! ## Currency Lock
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Preset Rows & the Currency Lock                      │
//! │                                                                         │
//! │   USD row:   [$1] [$5] [$10] [$20] [$50] [$100]                        │
//! │   LBP row:   [1,000] [5,000] [10,000] [20,000] [50,000] [100,000]      │
//! │                                                                         │
//! │   Tap on fresh entry ──► value set, that currency LOCKED,              │
//! │                          the other row's buttons DISABLED              │
//! │   Tap while locked ────► amount ADDED to the accumulator               │
//! │   clear_all ───────────► lock released, both rows enabled              │
//! │                                                                         │
//! │   Cross-currency correctness is enforced HERE, by enablement —         │
//! │   not inside the validator.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every preset carries its currency tag at the data level. There is no
//! magnitude-based classification anywhere: a denomination set that crosses
//! any numeric boundary stays unambiguous.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entry::NumericEntry;
use crate::format::{format_lbp, format_usd};
use crate::money::Money;
use crate::types::Currency;

// =============================================================================
// Preset
// =============================================================================

/// One denomination button: a currency tag plus an amount in that currency's
/// minor units (cents for USD, whole pounds for LBP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub currency: Currency,
    pub amount: i64,
}

impl Preset {
    /// Display label for the button face.
    pub fn label(&self) -> String {
        match self.currency {
            Currency::Usd => format_usd(Money::from_cents(self.amount)),
            Currency::Lbp => format_lbp(self.amount),
        }
    }
}

/// USD denominations, ascending (cents).
pub const USD_PRESETS: [i64; 6] = [100, 500, 1_000, 2_000, 5_000, 10_000];

/// LBP denominations, ascending (whole pounds).
pub const LBP_PRESETS: [i64; 6] = [1_000, 5_000, 10_000, 20_000, 50_000, 100_000];

// =============================================================================
// Preset Panel
// =============================================================================

/// Enable/disable state for one preset button, as handed to the GUI shell.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PresetButton {
    pub preset: Preset,
    pub label: String,
    pub enabled: bool,
}

/// The two fixed denomination rows and their enablement logic.
#[derive(Debug, Clone, Default)]
pub struct PresetPanel;

impl PresetPanel {
    /// All presets in display order: the USD row, then the LBP row.
    pub fn presets(&self) -> Vec<Preset> {
        USD_PRESETS
            .iter()
            .map(|&amount| Preset {
                currency: Currency::Usd,
                amount,
            })
            .chain(LBP_PRESETS.iter().map(|&amount| Preset {
                currency: Currency::Lbp,
                amount,
            }))
            .collect()
    }

    /// Whether a preset is currently selectable.
    ///
    /// All presets are enabled while no currency is locked; once the entry
    /// is locked, only the locked currency's row remains enabled.
    pub fn is_enabled(&self, entry: &NumericEntry, preset: &Preset) -> bool {
        match entry.locked_currency() {
            None => true,
            Some(locked) => locked == preset.currency,
        }
    }

    /// Button states for the GUI shell.
    pub fn buttons(&self, entry: &NumericEntry) -> Vec<PresetButton> {
        self.presets()
            .into_iter()
            .map(|preset| PresetButton {
                label: preset.label(),
                enabled: self.is_enabled(entry, &preset),
                preset,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
