pub mod routes;
pub mod ws;

use crate::errors::{PricerError, PricerResult};
use crate::state::AppState;
use std::sync::Arc;

/// Assemble the router and serve until the process exits. One page, one
/// quote socket, two JSON endpoints.
pub async fn serve(state: Arc<AppState>) -> PricerResult<()> {
    let port = state.config.server_port;

    let app = axum::Router::new()
        .route("/", axum::routing::get(routes::index))
        .route("/api/price", axum::routing::post(routes::post_price))
        .route("/api/counters", axum::routing::get(routes::get_counters))
        .route("/ws", axum::routing::get(ws::ws_handler))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PricerError::Server(format!("bind {addr}: {e}")))?;

    axum::serve(listener, app).await?;
    Ok(())
}
