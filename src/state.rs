use crate::config::AppConfig;
use crate::models::black_scholes::BlackScholes;
use crate::models::PricingInputs;
use portable_atomic::AtomicU64;
use std::sync::Arc;

// ── Messages INTO the quote socket ──

/// One recompute request from the form. The five inputs plus a client-side
/// sequence number: the server echoes `seq` so the page can discard a stale
/// reply that lands after a newer one (last write wins).
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct QuoteRequest {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    #[serde(default)]
    pub seq: u64,
}

impl QuoteRequest {
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

// ── Messages OUT of the quote socket ──

#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum WsMessage {
    #[serde(rename = "quote")]
    Quote {
        call_price: f64,
        put_price: f64,
        seq: u64,
        timestamp: String,
    },

    /// Validation failure for one input control. The socket stays open;
    /// the page shows `message` inline under `field`.
    #[serde(rename = "invalid")]
    Invalid {
        field: &'static str,
        message: String,
        seq: u64,
    },
}

// ── Performance Counters (lock-free) ──

pub struct PerfCounters {
    pub quotes_computed: AtomicU64,
    pub quotes_rejected: AtomicU64,
    pub ws_messages_sent: AtomicU64,
}

impl PerfCounters {
    pub fn new() -> Self {
        Self {
            quotes_computed: AtomicU64::new(0),
            quotes_rejected: AtomicU64::new(0),
            ws_messages_sent: AtomicU64::new(0),
        }
    }
}

// ── Application shared state ──

pub struct AppState {
    pub config: AppConfig,
    /// Shared pricer; pricing is pure so one instance serves every handler.
    pub pricer: BlackScholes,
    pub counters: PerfCounters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            pricer: BlackScholes::new(),
            counters: PerfCounters::new(),
        })
    }
}
