//! # Currency Conversion & Totals
//!
//! Converts the USD-denominated order total into LBP via a scalar exchange
//! rate and carries both for display.
//!
//! ## Why a Scaled-Integer Rate?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The street rate is quoted with a fractional part (89,999.5 LBP/USD).  │
//! │                                                                         │
//! │  Stored as thousandths of a pound per dollar:                           │
//! │    89_999_500 milli-LBP/USD  =  89,999.5 LBP/USD                        │
//! │                                                                         │
//! │  Conversion stays in integer math end to end:                           │
//! │    lbp = cents × rate_milli / 100_000   (i128 intermediate)            │
//! │                                                                         │
//! │  The division TRUNCATES. The local currency has no usable subdivision   │
//! │  at display granularity, and the terminal never rounds a pound into    │
//! │  existence.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Exchange Rate
// =============================================================================

/// LBP per USD, stored in thousandths (milli-pounds per dollar).
///
/// Construction is guarded: a zero or negative rate would silently corrupt
/// every displayed total, so it is rejected instead of stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(i64);

impl ExchangeRate {
    /// Creates a rate from thousandths of a pound per dollar.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::exchange::ExchangeRate;
    ///
    /// let rate = ExchangeRate::from_millis(89_999_500).unwrap(); // 89,999.5
    /// assert_eq!(rate.millis(), 89_999_500);
    /// assert!(ExchangeRate::from_millis(0).is_err());
    /// ```
    pub fn from_millis(millis: i64) -> CoreResult<Self> {
        if millis <= 0 {
            return Err(CoreError::InvalidExchangeRate);
        }
        Ok(ExchangeRate(millis))
    }

    /// Creates a rate from whole pounds per dollar.
    pub fn from_pounds(pounds_per_usd: i64) -> CoreResult<Self> {
        ExchangeRate::from_millis(pounds_per_usd.saturating_mul(1000))
    }

    /// The rate in thousandths of a pound per dollar.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Converts a USD amount to whole pounds, truncating.
    ///
    /// ## Example
    /// ```rust
    /// use cedar_core::exchange::ExchangeRate;
    /// use cedar_core::money::Money;
    ///
    /// let rate = ExchangeRate::from_millis(89_999_500).unwrap();
    /// // $10.00 × 89,999.5 = 899,995 exactly
    /// assert_eq!(rate.convert(Money::from_cents(1000)), 899_995);
    /// ```
    pub fn convert(&self, amount: Money) -> i64 {
        // cents × milli-rate / (100 cents/dollar × 1000 millis/pound).
        // i128 keeps the product clear of overflow for any realistic rate.
        (amount.cents() as i128 * self.0 as i128 / 100_000) as i64
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The order total in both currencies, as republished after every cart
/// mutation or rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// USD total in cents.
    pub usd_cents: i64,
    /// LBP total in whole pounds (truncated conversion).
    pub lbp: i64,
}

impl OrderTotals {
    /// Computes both displays from a USD total and the current rate.
    pub fn compute(total: Money, rate: ExchangeRate) -> Self {
        OrderTotals {
            usd_cents: total.cents(),
            lbp: rate.convert(total),
        }
    }

    /// Zero totals (empty order).
    pub fn zero() -> Self {
        OrderTotals {
            usd_cents: 0,
            lbp: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_guard() {
        assert!(ExchangeRate::from_millis(1).is_ok());
        assert!(matches!(
            ExchangeRate::from_millis(0),
            Err(CoreError::InvalidExchangeRate)
        ));
        assert!(matches!(
            ExchangeRate::from_millis(-89_500_000),
            Err(CoreError::InvalidExchangeRate)
        ));
        assert!(ExchangeRate::from_pounds(0).is_err());
    }

    #[test]
    fn test_exact_conversion() {
        let rate = ExchangeRate::from_pounds(90_000).unwrap();
        // $3.33 × 90,000 = 299,700 exactly
        assert_eq!(rate.convert(Money::from_cents(333)), 299_700);
    }

    /// A genuine fractional remainder must TRUNCATE, never round.
    #[test]
    fn test_conversion_truncates() {
        let rate = ExchangeRate::from_millis(89_999_500).unwrap(); // 89,999.5
        // $3.33 × 89,999.5 = 299,698.335 → 299,698
        assert_eq!(rate.convert(Money::from_cents(333)), 299_698);
        // $0.01 × 89,999.5 = 899.995 → 899 (a .995 remainder would round up)
        assert_eq!(rate.convert(Money::from_cents(1)), 899);
        // $10.00 lands exactly
        assert_eq!(rate.convert(Money::from_cents(1000)), 899_995);
    }

    #[test]
    fn test_large_total_no_overflow() {
        let rate = ExchangeRate::from_pounds(100_000).unwrap();
        // $999,999.99 at 100,000 LBP/USD
        let total = Money::from_cents(99_999_999);
        assert_eq!(rate.convert(total), 99_999_999_000);
    }

    #[test]
    fn test_order_totals() {
        let rate = ExchangeRate::from_pounds(90_000).unwrap();
        let totals = OrderTotals::compute(Money::from_cents(700), rate);
        assert_eq!(totals.usd_cents, 700);
        assert_eq!(totals.lbp, 630_000);

        assert_eq!(OrderTotals::zero().lbp, 0);
    }
}
