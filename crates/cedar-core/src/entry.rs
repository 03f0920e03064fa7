//! # Numeric Entry State Machine
//!
//! The numpad accumulator: composes digit/preset input into a mode-aware raw
//! value, formats it for display, and hands the clean value to the
//! controller on confirm.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     NumericEntry Transitions                            │
//! │                                                                         │
//! │  press_digit(d) ────► raw "0" is replaced, anything else appended      │
//! │  press_decimal() ───► appended once, only when the mode allows it      │
//! │  press_backspace() ─► last char removed; empty collapses to "0"        │
//! │  press_clear() ─────► raw := "0"          (currency lock SURVIVES)     │
//! │  clear_all() ───────► raw := "0", unlock  (presets re-enable)          │
//! │  set_mode(m) ───────► raw := "0", unlock, mode := m                    │
//! │  apply_preset(p) ───► fresh: set + lock   additive: parse, add, keep   │
//! │  confirm() ─────────► returns clean raw; does NOT reset (controller    │
//! │                       resets after successful consumption)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissiveness
//! The state machine never blocks a keystroke except a decimal point that is
//! repeated or not allowed by the mode. Range and format judgment belongs to
//! [`crate::validation`] alone — a cashier can type "10000" in quantity mode
//! and is told why on confirm, not silently ignored mid-keystroke.
//!
//! The clear/clear_all asymmetry is deliberate: repeated C presses while
//! mid-entry must not silently re-enable the opposite currency's presets.

use crate::format::group_digits;
use crate::presets::Preset;
use crate::types::{Currency, EntryMode};
use crate::validation::{lenient_minor, rule_for};

// =============================================================================
// NumericEntry
// =============================================================================

/// The transient value being typed via keypad/presets.
///
/// ## Invariants
/// - `raw` is always a syntactically valid partial number for the mode:
///   ASCII digits with at most one `.`, and `.` only in decimal modes
/// - `raw` is never empty (empty collapses to `"0"`)
/// - `locked` is set by preset selection and cleared only by `clear_all`
///   or `set_mode`
#[derive(Debug, Clone)]
pub struct NumericEntry {
    mode: EntryMode,
    raw: String,
    locked: Option<Currency>,
}

impl NumericEntry {
    /// Creates a fresh entry: idle mode, raw `"0"`, no currency lock.
    pub fn new() -> Self {
        NumericEntry {
            mode: EntryMode::Idle,
            raw: String::from("0"),
            locked: None,
        }
    }

    /// The active entry mode.
    #[inline]
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// The unformatted accumulator string.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The currency locked by a preset, if any.
    #[inline]
    pub fn locked_currency(&self) -> Option<Currency> {
        self.locked
    }

    /// Whether anything has been entered (`raw != "0"`).
    #[inline]
    pub fn has_value(&self) -> bool {
        self.raw != "0"
    }

    /// Switches the entry mode, resetting the accumulator and the lock.
    pub fn set_mode(&mut self, mode: EntryMode) {
        self.mode = mode;
        self.raw.clear();
        self.raw.push('0');
        self.locked = None;
    }

    /// Appends a digit (0-9).
    ///
    /// A raw of `"0"` is replaced rather than appended to, so the display
    /// never shows leading zeros like "05".
    pub fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range");
        let ch = (b'0' + digit.min(9)) as char;
        if self.raw == "0" {
            self.raw.clear();
        }
        self.raw.push(ch);
    }

    /// Appends the decimal point.
    ///
    /// The only keystroke the state machine ever swallows: a second point,
    /// or a point in a mode without decimals.
    pub fn press_decimal(&mut self) {
        let allows = rule_for(self.mode).map(|r| r.allow_decimal).unwrap_or(false);
        if !allows || self.raw.contains('.') {
            return;
        }
        self.raw.push('.');
    }

    /// Removes the last character; an emptied accumulator collapses to `"0"`.
    pub fn press_backspace(&mut self) {
        self.raw.pop();
        if self.raw.is_empty() {
            self.raw.push('0');
        }
    }

    /// The C button: resets the accumulator to `"0"`.
    ///
    /// The currency lock SURVIVES — unlocking is [`Self::clear_all`], a
    /// separate explicit operation.
    pub fn press_clear(&mut self) {
        self.raw.clear();
        self.raw.push('0');
    }

    /// Full clear: resets the accumulator and releases the currency lock,
    /// re-enabling both currencies' preset buttons.
    pub fn clear_all(&mut self) {
        self.press_clear();
        self.locked = None;
    }

    /// Returns the clean (unformatted) value for consumption.
    ///
    /// Does not reset: the controller decides when to reset after the value
    /// has actually been used.
    #[inline]
    pub fn confirm(&self) -> &str {
        &self.raw
    }

    // -------------------------------------------------------------------------
    // Presets
    // -------------------------------------------------------------------------

    /// Applies a denomination preset.
    ///
    /// Fresh entry (raw `"0"`): the accumulator becomes the preset amount
    /// and the preset's currency is locked. Otherwise the current value is
    /// parsed and the amount added; a value that fails to parse falls back
    /// to the fresh-set behavior rather than erroring.
    pub fn apply_preset(&mut self, preset: Preset) {
        let mode = EntryMode::for_currency(preset.currency);
        let total = if self.raw == "0" {
            preset.amount
        } else {
            match lenient_minor(mode, &self.raw) {
                Some(current) => current + preset.amount,
                None => preset.amount,
            }
        };
        self.raw = serialize_minor(mode, total);
        self.mode = mode;
        self.locked = Some(preset.currency);
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Formats the accumulator for the entry display.
    ///
    /// Quantity/LBP/idle render as a grouped integer. USD renders with a
    /// fraction: a whole value gets `.00`, a value ending in a bare point
    /// keeps the point after the grouped integer part, and a partial
    /// fraction renders as typed — the display never jumps while the
    /// cashier is mid-keystroke.
    pub fn display(&self) -> String {
        match self.mode {
            EntryMode::Usd => match self.raw.split_once('.') {
                None => format!("{}.00", group_digits(&self.raw)),
                Some((int_part, "")) => format!("{}.", group_digits(int_part)),
                Some((int_part, frac)) => format!("{}.{}", group_digits(int_part), frac),
            },
            EntryMode::Quantity | EntryMode::Lbp | EntryMode::Idle => group_digits(&self.raw),
        }
    }
}

impl Default for NumericEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes minor units back into a clean raw string for the mode.
///
/// USD drops a zero fraction ("15", not "15.00") so additive presets keep
/// the same shape the keypad would produce.
fn serialize_minor(mode: EntryMode, minor: i64) -> String {
    match mode {
        EntryMode::Usd => {
            if minor % 100 == 0 {
                (minor / 100).to_string()
            } else {
                format!("{}.{:02}", minor / 100, (minor % 100).abs())
            }
        }
        EntryMode::Quantity | EntryMode::Lbp | EntryMode::Idle => minor.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
