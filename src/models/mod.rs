pub mod black_scholes;

use crate::errors::{PricerError, PricerResult};

/// Market and contract parameters for one European option quote.
/// Stack-allocated, Copy. Each pricing request is a pure function of these
/// five values; nothing is shared or mutated between requests.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct PricingInputs {
    /// Current price of the underlying asset.
    pub spot: f64,
    /// Exercise price of the contract.
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Continuously compounded annual rate.
    pub risk_free_rate: f64,
    /// Annualized standard deviation of log-returns.
    pub volatility: f64,
}

impl PricingInputs {
    /// Check every domain constraint before any arithmetic.
    /// `ln(spot/strike)` needs positive prices; the `sigma * sqrt(T)`
    /// denominator needs positive volatility and expiry. A non-finite rate
    /// would poison the discount factor, so it is rejected here too.
    pub fn validate(&self) -> PricerResult<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricerError::InvalidPrice {
                field: "spot",
                value: self.spot,
            });
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricerError::InvalidPrice {
                field: "strike",
                value: self.strike,
            });
        }
        if !self.time_to_expiry.is_finite() || self.time_to_expiry <= 0.0 {
            return Err(PricerError::InvalidTimeToExpiry(self.time_to_expiry));
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(PricerError::InvalidVolatility(self.volatility));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricerError::InvalidRate(self.risk_free_rate));
        }
        Ok(())
    }
}

/// Theoretical European premia for one contract.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}
