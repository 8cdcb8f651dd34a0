/// Domain-specific error types for the pricing service.
/// Every variant except `Config` is an input-validation failure and is
/// raised before any arithmetic runs: the pricer must never hand back a
/// silent NaN or infinity in place of a premium.
#[derive(Debug, thiserror::Error)]
pub enum PricerError {
    #[error("volatility must be strictly positive, got {0}")]
    InvalidVolatility(f64),

    #[error("time to expiry must be strictly positive, got {0} years")]
    InvalidTimeToExpiry(f64),

    #[error("{field} must be a strictly positive price, got {value}")]
    InvalidPrice { field: &'static str, value: f64 },

    #[error("risk-free rate must be finite, got {0}")]
    InvalidRate(f64),

    #[error("config error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<std::io::Error> for PricerError {
    fn from(e: std::io::Error) -> Self {
        PricerError::Server(e.to_string())
    }
}

impl PricerError {
    /// Input control the failure belongs to, so the form can surface the
    /// message inline instead of tearing down the page.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidVolatility(_) => "volatility",
            Self::InvalidTimeToExpiry(_) => "time_to_expiry",
            Self::InvalidPrice { field, .. } => *field,
            Self::InvalidRate(_) => "risk_free_rate",
            Self::Config(_) | Self::Server(_) => "config",
        }
    }
}

pub type PricerResult<T> = Result<T, PricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_controls() {
        assert_eq!(PricerError::InvalidVolatility(0.0).field(), "volatility");
        assert_eq!(PricerError::InvalidTimeToExpiry(-1.0).field(), "time_to_expiry");
        let err = PricerError::InvalidPrice { field: "spot", value: -5.0 };
        assert_eq!(err.field(), "spot");
    }
}
