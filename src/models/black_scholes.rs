use crate::errors::PricerResult;
use crate::models::{PricingInputs, PricingResult};
use statrs::distribution::{ContinuousCDF, Normal};

/// Black-Scholes European option pricing.
///
/// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
///
/// call = S*Phi(d1) - K*exp(-rT)*Phi(d2)
/// put  = K*exp(-rT)*Phi(-d2) - S*Phi(-d1)
///
/// Inputs are validated before any arithmetic. No allocations.
pub struct BlackScholes {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl BlackScholes {
    pub fn new() -> Self {
        // Normal::new(0, 1) only fails if std_dev <= 0; this is safe.
        let normal = Normal::new(0.0, 1.0).unwrap_or(Normal::standard());
        Self { normal }
    }

    /// Pure function: both premia from the five inputs. Deterministic,
    /// side-effect-free, and rejects any input set the closed form is
    /// undefined for instead of returning NaN.
    pub fn price(&self, inputs: &PricingInputs) -> PricerResult<PricingResult> {
        inputs.validate()?;

        let PricingInputs {
            spot,
            strike,
            time_to_expiry: t,
            risk_free_rate: r,
            volatility: sigma,
        } = *inputs;

        let sqrt_t = t.sqrt();
        let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
        let d2 = d1 - sigma * sqrt_t;
        let discount = (-r * t).exp();

        let call_price = spot * self.normal.cdf(d1) - strike * discount * self.normal.cdf(d2);
        let put_price = strike * discount * self.normal.cdf(-d2) - spot * self.normal.cdf(-d1);

        Ok(PricingResult {
            call_price,
            put_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PricerError;

    fn inputs(spot: f64, strike: f64, t: f64, r: f64, sigma: f64) -> PricingInputs {
        PricingInputs {
            spot,
            strike,
            time_to_expiry: t,
            risk_free_rate: r,
            volatility: sigma,
        }
    }

    #[test]
    fn test_textbook_scenario() {
        let pricer = BlackScholes::new();
        let result = pricer
            .price(&inputs(100.0, 100.0, 1.0, 0.05, 0.2))
            .expect("textbook inputs must price");
        // Standard reference values for S=K=100, T=1, r=5%, sigma=20%
        assert!(
            (result.call_price - 10.45).abs() < 0.01,
            "call={} should be ~10.45",
            result.call_price
        );
        assert!(
            (result.put_price - 5.57).abs() < 0.01,
            "put={} should be ~5.57",
            result.put_price
        );
    }

    #[test]
    fn test_put_call_parity() {
        let pricer = BlackScholes::new();
        let cases = [
            inputs(100.0, 100.0, 1.0, 0.05, 0.2),
            inputs(90.0, 110.0, 0.5, 0.02, 0.35),
            inputs(250.0, 180.0, 2.0, 0.1, 0.6),
            inputs(42.0, 45.0, 0.25, 0.0, 0.15),
        ];
        for c in cases {
            let result = pricer.price(&c).expect("valid inputs must price");
            let forward = c.spot - c.strike * (-c.risk_free_rate * c.time_to_expiry).exp();
            let parity_gap = (result.call_price - result.put_price) - forward;
            assert!(
                parity_gap.abs() < 1e-6,
                "parity violated by {parity_gap} for spot={} strike={}",
                c.spot,
                c.strike
            );
        }
    }

    #[test]
    fn test_monotonic_in_volatility() {
        let pricer = BlackScholes::new();
        let mut prev_call = f64::NEG_INFINITY;
        let mut prev_put = f64::NEG_INFINITY;
        for sigma in [0.05, 0.1, 0.2, 0.4, 0.8] {
            let result = pricer
                .price(&inputs(100.0, 105.0, 0.75, 0.03, sigma))
                .expect("valid inputs must price");
            assert!(
                result.call_price > prev_call,
                "call must rise with vol: {} !> {prev_call} at sigma={sigma}",
                result.call_price
            );
            assert!(
                result.put_price > prev_put,
                "put must rise with vol: {} !> {prev_put} at sigma={sigma}",
                result.put_price
            );
            prev_call = result.call_price;
            prev_put = result.put_price;
        }
    }

    #[test]
    fn test_near_expiry_converges_to_intrinsic() {
        let pricer = BlackScholes::new();

        let itm_call = pricer
            .price(&inputs(110.0, 100.0, 1e-9, 0.05, 0.2))
            .expect("tiny expiry is still valid");
        assert!(
            (itm_call.call_price - 10.0).abs() < 1e-6,
            "ITM call should be intrinsic 10, got {}",
            itm_call.call_price
        );
        assert!(
            itm_call.put_price.abs() < 1e-6,
            "OTM put should be ~0, got {}",
            itm_call.put_price
        );

        let itm_put = pricer
            .price(&inputs(90.0, 100.0, 1e-9, 0.05, 0.2))
            .expect("tiny expiry is still valid");
        assert!(
            (itm_put.put_price - 10.0).abs() < 1e-6,
            "ITM put should be intrinsic 10, got {}",
            itm_put.put_price
        );
        assert!(
            itm_put.call_price.abs() < 1e-6,
            "OTM call should be ~0, got {}",
            itm_put.call_price
        );
    }

    #[test]
    fn test_atm_symmetry_at_zero_rate() {
        let pricer = BlackScholes::new();
        let result = pricer
            .price(&inputs(100.0, 100.0, 1.0, 0.0, 0.3))
            .expect("valid inputs must price");
        assert!(
            (result.call_price - result.put_price).abs() < 1e-9,
            "ATM with r=0 must be symmetric: call={} put={}",
            result.call_price,
            result.put_price
        );
    }

    #[test]
    fn test_zero_volatility_raises() {
        let pricer = BlackScholes::new();
        let err = pricer
            .price(&inputs(100.0, 100.0, 1.0, 0.05, 0.0))
            .unwrap_err();
        assert!(matches!(err, PricerError::InvalidVolatility(_)));
    }

    #[test]
    fn test_zero_expiry_raises() {
        let pricer = BlackScholes::new();
        let err = pricer
            .price(&inputs(100.0, 100.0, 0.0, 0.05, 0.2))
            .unwrap_err();
        assert!(matches!(err, PricerError::InvalidTimeToExpiry(_)));
    }

    #[test]
    fn test_prices_are_finite_and_non_negative() {
        let pricer = BlackScholes::new();
        let result = pricer
            .price(&inputs(0.5, 800.0, 3.0, 0.18, 0.95))
            .expect("extreme but valid inputs must price");
        assert!(result.call_price.is_finite() && result.call_price >= 0.0);
        assert!(result.put_price.is_finite() && result.put_price >= 0.0);
    }
}
