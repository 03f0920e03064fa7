//! # Configuration State
//!
//! Terminal configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CEDAR_*`)
//! 2. Defaults (this file)
//!
//! Computed once and passed by reference down the component tree; the
//! configuration is read-only after initialization, so no lock is needed.

use serde::{Deserialize, Serialize};

/// Terminal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the shell's title bar).
    pub store_name: String,

    /// Pricing currency code (ISO 4217).
    pub currency_code: String,

    /// Local tender currency code.
    pub local_currency_code: String,

    /// Default exchange rate in thousandths of a pound per dollar
    /// (89_500_000 = 89,500.0 LBP/USD).
    pub default_rate_millis: i64,

    /// Button protection window in milliseconds.
    pub button_protect_ms: u64,

    /// Maximum accepted search query length.
    pub max_search_len: usize,
}

impl Default for ConfigState {
    /// Defaults suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "Cedar POS Dev Store".to_string(),
            currency_code: "USD".to_string(),
            local_currency_code: "LBP".to_string(),
            default_rate_millis: 89_500_000, // 89,500 LBP/USD
            button_protect_ms: 500,
            max_search_len: 100,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CEDAR_STORE_NAME`: override store name
    /// - `CEDAR_EXCHANGE_RATE`: override default rate, pounds per dollar
    ///   (e.g. "89500" or "89999.5")
    /// - `CEDAR_BUTTON_PROTECT_MS`: override the debounce window
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("CEDAR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(rate_str) = std::env::var("CEDAR_EXCHANGE_RATE") {
            if let Some(millis) = parse_rate_millis(&rate_str) {
                config.default_rate_millis = millis;
            }
        }

        if let Ok(ms_str) = std::env::var("CEDAR_BUTTON_PROTECT_MS") {
            if let Ok(ms) = ms_str.parse::<u64>() {
                config.button_protect_ms = ms;
            }
        }

        config
    }
}

/// Parses a decimal rate string ("89999.5") into milli-pounds per dollar,
/// in integer math. Fractional digits beyond three are dropped.
fn parse_rate_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, f),
        None => (raw, ""),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let int_value: i64 = int_part.parse().ok()?;
    let mut frac_millis = 0i64;
    let mut scale = 100;
    for b in frac_part.bytes().take(3) {
        frac_millis += (b - b'0') as i64 * scale;
        scale /= 10;
    }
    Some(int_value * 1000 + frac_millis)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.local_currency_code, "LBP");
        assert_eq!(config.button_protect_ms, 500);
    }

    #[test]
    fn test_parse_rate_millis() {
        assert_eq!(parse_rate_millis("89500"), Some(89_500_000));
        assert_eq!(parse_rate_millis("89999.5"), Some(89_999_500));
        assert_eq!(parse_rate_millis("89999.555"), Some(89_999_555));
        assert_eq!(parse_rate_millis("89999.5555"), Some(89_999_555));
        assert_eq!(parse_rate_millis(""), None);
        assert_eq!(parse_rate_millis("abc"), None);
        assert_eq!(parse_rate_millis("1.2.3"), None);
    }
}
