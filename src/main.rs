mod config;
mod errors;
mod models;
mod server;
mod state;

use crate::config::AppConfig;
use crate::models::black_scholes::BlackScholes;
use crate::models::PricingResult;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Structured logging (stderr, so quote output stays clean on stdout)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let mode = match args.peek() {
        Some(arg) if !arg.starts_with("--") => args.next().unwrap_or_default(),
        _ => "quote".to_string(),
    };

    let mut cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = cfg.apply_flags(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    match mode.as_str() {
        "quote" => run_quote(&cfg),
        "serve" => {
            tracing::info!("quote form starting");
            let state = AppState::new(cfg);
            if let Err(e) = server::serve(state).await {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        }
        other => {
            tracing::error!("unknown mode: {other} (expected `quote` or `serve`)");
            std::process::exit(1);
        }
    }
}

/// Price the configured contract once and print both premia.
/// Invalid input aborts with the validation message and a non-zero status
/// instead of printing NaN.
fn run_quote(cfg: &AppConfig) {
    let pricer = BlackScholes::new();
    match pricer.price(&cfg.inputs()) {
        Ok(result) => print!("{}", format_quote(&result)),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn format_quote(result: &PricingResult) -> String {
    format!(
        "Call Option Price: {:.2}\nPut Option Price: {:.2}\n",
        result.call_price, result.put_price
    )
}
