//! # Exchange-Rate Source
//!
//! The rate collaborator at its interface boundary. The session polls it at
//! sign-in and whenever explicitly refreshed; there is no push mechanism.

use cedar_core::ExchangeRate;

/// Supplies the current LBP/USD rate.
pub trait RateSource: Send + Sync {
    fn current(&self) -> ExchangeRate;
}

/// A source pinned to one configured rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource {
    rate: ExchangeRate,
}

impl FixedRateSource {
    pub fn new(rate: ExchangeRate) -> Self {
        FixedRateSource { rate }
    }
}

impl RateSource for FixedRateSource {
    fn current(&self) -> ExchangeRate {
        self.rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_returns_its_rate() {
        let rate = ExchangeRate::from_pounds(89_500).unwrap();
        let source = FixedRateSource::new(rate);
        assert_eq!(source.current(), rate);
    }
}
