use crate::errors::{PricerError, PricerResult};
use crate::models::PricingInputs;

/// Runtime configuration: the default contract plus the server port.
/// Values come from the environment (with the classic textbook contract as
/// fallback) and can be overridden per-run by command-line flags. No
/// module-level globals; callers own the config value.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> PricerResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            spot: env_f64("PRICER_SPOT", "100")?,
            strike: env_f64("PRICER_STRIKE", "100")?,
            time_to_expiry: env_f64("PRICER_EXPIRY_YEARS", "1")?,
            risk_free_rate: env_f64("PRICER_RATE", "0.05")?,
            volatility: env_f64("PRICER_VOL", "0.2")?,
            server_port: env_var_or("PRICER_PORT", "3000")
                .parse::<u16>()
                .map_err(|e| PricerError::Config(format!("PRICER_PORT: {e}")))?,
        })
    }

    /// Apply `--flag value` overrides. Unknown flags and malformed values
    /// are hard errors so a typo never silently prices the default contract.
    pub fn apply_flags<I>(&mut self, args: I) -> PricerResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| PricerError::Config(format!("{flag} requires a value")))?;
            match flag.as_str() {
                "--spot" => self.spot = parse_f64(&flag, &value)?,
                "--strike" => self.strike = parse_f64(&flag, &value)?,
                "--expiry" => self.time_to_expiry = parse_f64(&flag, &value)?,
                "--rate" => self.risk_free_rate = parse_f64(&flag, &value)?,
                "--vol" => self.volatility = parse_f64(&flag, &value)?,
                "--port" => {
                    self.server_port = value
                        .parse::<u16>()
                        .map_err(|e| PricerError::Config(format!("--port {value}: {e}")))?;
                }
                _ => {
                    return Err(PricerError::Config(format!("unknown flag: {flag}")));
                }
            }
        }
        Ok(())
    }

    /// The contract this config describes, ready for the pricer.
    pub fn inputs(&self) -> PricingInputs {
        PricingInputs {
            spot: self.spot,
            strike: self.strike,
            time_to_expiry: self.time_to_expiry,
            risk_free_rate: self.risk_free_rate,
            volatility: self.volatility,
        }
    }
}

fn parse_f64(flag: &str, value: &str) -> PricerResult<f64> {
    value
        .parse::<f64>()
        .map_err(|e| PricerError::Config(format!("{flag} {value}: {e}")))
}

fn env_f64(key: &str, default: &str) -> PricerResult<f64> {
    env_var_or(key, default)
        .parse::<f64>()
        .map_err(|e| PricerError::Config(format!("{key}: {e}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
            server_port: 3000,
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_override_defaults() {
        let mut cfg = base_config();
        cfg.apply_flags(args(&["--spot", "105.5", "--vol", "0.35", "--port", "8080"]))
            .expect("valid flags must apply");
        assert_eq!(cfg.spot, 105.5);
        assert_eq!(cfg.volatility, 0.35);
        assert_eq!(cfg.server_port, 8080);
        // Untouched fields keep their defaults
        assert_eq!(cfg.strike, 100.0);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let mut cfg = base_config();
        let err = cfg.apply_flags(args(&["--sigma", "0.2"])).unwrap_err();
        assert!(matches!(err, PricerError::Config(_)));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let mut cfg = base_config();
        let err = cfg.apply_flags(args(&["--strike"])).unwrap_err();
        assert!(matches!(err, PricerError::Config(_)));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let mut cfg = base_config();
        let err = cfg.apply_flags(args(&["--rate", "five"])).unwrap_err();
        assert!(matches!(err, PricerError::Config(_)));
    }

    #[test]
    fn test_inputs_mirror_config() {
        let cfg = base_config();
        let inputs = cfg.inputs();
        assert_eq!(inputs.spot, cfg.spot);
        assert_eq!(inputs.volatility, cfg.volatility);
    }
}
