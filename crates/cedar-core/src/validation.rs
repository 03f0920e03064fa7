//! # Validation Module
//!
//! The per-mode rules table and the single authority for rejecting numeric
//! input in Cedar POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Numpad state machine (entry.rs)                              │
//! │  ├── PERMISSIVE: only swallows an impossible decimal point             │
//! │  └── Everything else is accepted and judged here on confirm            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (rules table)                                    │
//! │  ├── required guard → decimal policy → parse → min → max → places      │
//! │  └── Single authority: the state machine never rejects, this does      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Controller (session)                                         │
//! │  └── Converts the reason to a user-visible message, nothing raises     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cedar_core::types::EntryMode;
//! use cedar_core::validation::{validate, parse_minor};
//!
//! assert!(validate(EntryMode::Quantity, "3").is_ok());
//! assert!(validate(EntryMode::Usd, "10.999").is_err());
//! assert_eq!(parse_minor(EntryMode::Usd, "3.50").unwrap(), 350);
//! ```

use crate::error::ValidationError;
use crate::types::{EntryMode, Tender};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Rules Table
// =============================================================================

/// Bounds and format rules for one entry mode.
///
/// `min_minor`/`max_minor` are in the mode's smallest unit: cents for USD,
/// whole units for quantity and LBP. The labels are the human-readable
/// bounds used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct EntryRule {
    pub allow_decimal: bool,
    pub decimal_places: Option<u32>,
    pub min_minor: i64,
    pub max_minor: i64,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

/// Quantity: whole items, 1..=9999.
const QUANTITY_RULE: EntryRule = EntryRule {
    allow_decimal: false,
    decimal_places: None,
    min_minor: 1,
    max_minor: 9999,
    min_label: "1",
    max_label: "9999",
};

/// USD amounts: 0.01..=999999.99, two decimal places.
const USD_RULE: EntryRule = EntryRule {
    allow_decimal: true,
    decimal_places: Some(2),
    min_minor: 1,          // $0.01 in cents
    max_minor: 99_999_999, // $999,999.99 in cents
    min_label: "0.01",
    max_label: "999999.99",
};

/// LBP amounts: whole pounds, 1..=999999999.
const LBP_RULE: EntryRule = EntryRule {
    allow_decimal: false,
    decimal_places: None,
    min_minor: 1,
    max_minor: 999_999_999,
    min_label: "1",
    max_label: "999999999",
};

/// Looks up the rule for an entry mode.
///
/// `Idle` has no rule: the numpad is not bound to a value kind, so there is
/// nothing to consume and [`validate`] reports "value required".
#[inline]
pub const fn rule_for(mode: EntryMode) -> Option<&'static EntryRule> {
    match mode {
        EntryMode::Quantity => Some(&QUANTITY_RULE),
        EntryMode::Usd => Some(&USD_RULE),
        EntryMode::Lbp => Some(&LBP_RULE),
        EntryMode::Idle => None,
    }
}

// =============================================================================
// Parsing helpers
// =============================================================================

/// Splits a raw entry into integer and fractional digit runs.
///
/// Accepts at most one `.`; both sides must be pure ASCII digits (either may
/// be empty, as in `"5."` or `".5"`). Anything else is a format error.
fn split_number(raw: &str) -> ValidationResult<(&str, Option<&str>)> {
    let mut parts = raw.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    if frac_part.map(|f| f.contains('.')).unwrap_or(false) {
        return Err(ValidationError::InvalidFormat);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }
    if let Some(frac) = frac_part {
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat);
        }
    }
    // Overflow guard: anything this long is garbage input, not a price.
    if int_part.len() > 12 || frac_part.map(|f| f.len() > 9).unwrap_or(false) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok((int_part, frac_part))
}

fn parse_digits(digits: &str) -> i64 {
    // Only called on short, digits-only runs vetted by split_number.
    digits.parse::<i64>().unwrap_or(0)
}

const fn pow10(exp: u32) -> i128 {
    let mut value: i128 = 1;
    let mut i = 0;
    while i < exp {
        value *= 10;
        i += 1;
    }
    value
}

// =============================================================================
// Validation entry points
// =============================================================================

/// Validates a raw entry string against the rules for `mode`.
///
/// ## Check Order
/// 1. Empty, literal `"0"`, or bare `"."` → value required (the "nothing
///    entered yet" guard, distinct from a confirmed zero)
/// 2. Decimal point present but decimals forbidden → decimals not allowed
/// 3. Parse per the mode's format → invalid number format on failure
/// 4. Below minimum → "must be at least {min}"
/// 5. Above maximum → "cannot exceed {max}"
/// 6. More fractional digits than allowed → decimal-places violation
///
/// The range comparison is exact for any typed fraction length
/// (cross-multiplied i128), never floating point.
pub fn validate(mode: EntryMode, raw: &str) -> ValidationResult<()> {
    if raw.is_empty() || raw == "0" || raw == "." {
        return Err(ValidationError::ValueRequired);
    }

    let rule = match rule_for(mode) {
        Some(rule) => rule,
        None => return Err(ValidationError::ValueRequired),
    };

    if raw.contains('.') && !rule.allow_decimal {
        return Err(ValidationError::DecimalNotAllowed);
    }

    let (int_part, frac_part) = split_number(raw)?;

    if rule.allow_decimal {
        // Scale the typed value and the bounds to a common denominator:
        //   value = int.frac with f fractional digits
        //   value ⋛ bound/100  ⇔  value·10^f·100 ⋛ bound·10^f
        let frac = frac_part.unwrap_or("");
        let f = frac.len() as u32;
        let scaled = parse_digits(int_part) as i128 * pow10(f) + parse_digits(frac) as i128;

        if scaled * 100 < rule.min_minor as i128 * pow10(f) {
            return Err(ValidationError::BelowMinimum {
                min: rule.min_label.to_string(),
            });
        }
        if scaled * 100 > rule.max_minor as i128 * pow10(f) {
            return Err(ValidationError::AboveMaximum {
                max: rule.max_label.to_string(),
            });
        }
        if let Some(places) = rule.decimal_places {
            if f > places {
                return Err(ValidationError::TooManyDecimalPlaces { max: places });
            }
        }
    } else {
        let value = parse_digits(int_part);
        if value < rule.min_minor {
            return Err(ValidationError::BelowMinimum {
                min: rule.min_label.to_string(),
            });
        }
        if value > rule.max_minor {
            return Err(ValidationError::AboveMaximum {
                max: rule.max_label.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates and converts a raw entry to the mode's minor units.
///
/// Cents for USD, whole units for quantity/LBP. This is what the controller
/// consumes after a successful [`validate`].
///
/// ## Example
/// ```rust
/// use cedar_core::types::EntryMode;
/// use cedar_core::validation::parse_minor;
///
/// assert_eq!(parse_minor(EntryMode::Usd, "3.5").unwrap(), 350);
/// assert_eq!(parse_minor(EntryMode::Quantity, "3").unwrap(), 3);
/// ```
pub fn parse_minor(mode: EntryMode, raw: &str) -> ValidationResult<i64> {
    validate(mode, raw)?;
    // Unwrap is safe post-validate; keep the lenient path as the one parser.
    lenient_minor(mode, raw).ok_or(ValidationError::InvalidFormat)
}

/// Syntax-only conversion to minor units, with no rule checks.
///
/// Used by the preset selector's additive path, which must accumulate on top
/// of a mid-entry value that would not yet pass validation ("0.5" while the
/// minimum is 1). Returns `None` when the string is not a number at all;
/// fractional digits beyond the mode's precision are truncated.
pub fn lenient_minor(mode: EntryMode, raw: &str) -> Option<i64> {
    let (int_part, frac_part) = split_number(raw).ok()?;
    match mode {
        EntryMode::Usd => {
            let frac = frac_part.unwrap_or("");
            let cents_frac = match frac.len() {
                0 => 0,
                1 => parse_digits(frac) * 10,
                _ => parse_digits(&frac[..2]),
            };
            Some(parse_digits(int_part) * 100 + cents_frac)
        }
        EntryMode::Quantity | EntryMode::Lbp => {
            if frac_part.is_some() {
                return None;
            }
            Some(parse_digits(int_part))
        }
        EntryMode::Idle => None,
    }
}

/// Validates a payment amount for the given tender.
///
/// Maps the tender to its entry mode and delegates to [`validate`], with one
/// stricter pre-check preserved from the terminal's behavior: LBP cash
/// rejects any value containing a decimal point *before* generic validation
/// runs, so the decimal-policy reason wins over every other check.
pub fn validate_tender(tender: Tender, raw: &str) -> ValidationResult<()> {
    if tender == Tender::CashLbp && raw.contains('.') {
        return Err(ValidationError::DecimalNotAllowed);
    }
    validate(tender.entry_mode(), raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_guard() {
        for mode in [EntryMode::Quantity, EntryMode::Usd, EntryMode::Lbp] {
            assert_eq!(validate(mode, ""), Err(ValidationError::ValueRequired));
            assert_eq!(validate(mode, "0"), Err(ValidationError::ValueRequired));
            assert_eq!(validate(mode, "."), Err(ValidationError::ValueRequired));
        }
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate(EntryMode::Quantity, "1").is_ok());
        assert!(validate(EntryMode::Quantity, "9999").is_ok());
        assert_eq!(
            validate(EntryMode::Quantity, "10000"),
            Err(ValidationError::AboveMaximum {
                max: "9999".to_string()
            })
        );
        assert_eq!(
            validate(EntryMode::Quantity, "2.5"),
            Err(ValidationError::DecimalNotAllowed)
        );
    }

    #[test]
    fn test_usd_boundaries() {
        assert!(validate(EntryMode::Usd, "0.01").is_ok());
        assert!(validate(EntryMode::Usd, "999999.99").is_ok());

        // 0.00 parses fine but sits below the $0.01 minimum.
        assert_eq!(
            validate(EntryMode::Usd, "0.00"),
            Err(ValidationError::BelowMinimum {
                min: "0.01".to_string()
            })
        );
        assert_eq!(
            validate(EntryMode::Usd, "1000000.00"),
            Err(ValidationError::AboveMaximum {
                max: "999999.99".to_string()
            })
        );
        // Three decimal places, in range: the places check fires.
        assert_eq!(
            validate(EntryMode::Usd, "10.999"),
            Err(ValidationError::TooManyDecimalPlaces { max: 2 })
        );
        // Out of range with three places: range wins (check order).
        assert_eq!(
            validate(EntryMode::Usd, "999999.999"),
            Err(ValidationError::AboveMaximum {
                max: "999999.99".to_string()
            })
        );
    }

    #[test]
    fn test_usd_partial_entries() {
        // Mid-entry shapes the numpad can produce are judged as numbers.
        assert!(validate(EntryMode::Usd, "5.").is_ok()); // 5.00
        assert!(validate(EntryMode::Usd, "0.5").is_ok()); // 0.50
        assert_eq!(
            validate(EntryMode::Usd, "0.001"),
            Err(ValidationError::BelowMinimum {
                min: "0.01".to_string()
            })
        );
    }

    #[test]
    fn test_lbp_bounds() {
        assert!(validate(EntryMode::Lbp, "1").is_ok());
        assert!(validate(EntryMode::Lbp, "999999999").is_ok());
        assert_eq!(
            validate(EntryMode::Lbp, "1000000000"),
            Err(ValidationError::AboveMaximum {
                max: "999999999".to_string()
            })
        );
        assert_eq!(
            validate(EntryMode::Lbp, "100.5"),
            Err(ValidationError::DecimalNotAllowed)
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            validate(EntryMode::Quantity, "12a"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate(EntryMode::Usd, "1.2.3"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate(EntryMode::Usd, "-5"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_idle_has_no_rule() {
        assert_eq!(
            validate(EntryMode::Idle, "5"),
            Err(ValidationError::ValueRequired)
        );
    }

    #[test]
    fn test_parse_minor() {
        assert_eq!(parse_minor(EntryMode::Quantity, "3").unwrap(), 3);
        assert_eq!(parse_minor(EntryMode::Usd, "3.50").unwrap(), 350);
        assert_eq!(parse_minor(EntryMode::Usd, "3.5").unwrap(), 350);
        assert_eq!(parse_minor(EntryMode::Usd, "25").unwrap(), 2500);
        assert_eq!(parse_minor(EntryMode::Lbp, "50000").unwrap(), 50_000);
        assert!(parse_minor(EntryMode::Usd, "0.00").is_err());
    }

    #[test]
    fn test_lenient_minor() {
        // No rule checks: "0" and below-minimum values still parse.
        assert_eq!(lenient_minor(EntryMode::Usd, "0"), Some(0));
        assert_eq!(lenient_minor(EntryMode::Usd, "0.5"), Some(50));
        assert_eq!(lenient_minor(EntryMode::Usd, "12."), Some(1200));
        assert_eq!(lenient_minor(EntryMode::Lbp, "1000"), Some(1000));
        assert_eq!(lenient_minor(EntryMode::Lbp, "10.5"), None);
        assert_eq!(lenient_minor(EntryMode::Usd, "x"), None);
    }

    #[test]
    fn test_tender_routing() {
        assert!(validate_tender(Tender::CashUsd, "12.50").is_ok());
        assert!(validate_tender(Tender::Card, "12.50").is_ok());
        assert!(validate_tender(Tender::CashLbp, "50000").is_ok());
    }

    /// The LBP cash pre-check must fire before any generic check, so the
    /// reason is always "decimals not allowed" — even for strings the
    /// generic pipeline would reject for other reasons first.
    #[test]
    fn test_lbp_cash_decimal_precheck() {
        assert_eq!(
            validate_tender(Tender::CashLbp, "100.5"),
            Err(ValidationError::DecimalNotAllowed)
        );
        // Bare "." would be "value required" generically; pre-check wins.
        assert_eq!(
            validate_tender(Tender::CashLbp, "."),
            Err(ValidationError::DecimalNotAllowed)
        );
    }
}
