use crate::state::{AppState, QuoteRequest, WsMessage};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use portable_atomic::Ordering::Relaxed;
use std::sync::Arc;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Request/reply loop for one form client. Every inbound message is an
/// independent recompute; replies carry the client's `seq` so it can drop
/// stale ones. Invalid input answers on the same socket instead of
/// closing it.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    while let Some(msg) = receiver.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => continue, // Ignore pings and binary frames
        };

        let reply = match serde_json::from_str::<QuoteRequest>(&text) {
            Ok(req) => quote(&req, &state),
            Err(e) => {
                tracing::debug!(error = %e, "unparseable quote request");
                continue;
            }
        };

        match serde_json::to_string(&reply) {
            Ok(json) => {
                if sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
                state.counters.ws_messages_sent.fetch_add(1, Relaxed);
            }
            Err(_) => continue,
        }
    }
}

/// Price one request into an outbound message. Pure apart from counters.
pub(crate) fn quote(req: &QuoteRequest, state: &AppState) -> WsMessage {
    match state.pricer.price(&req.inputs()) {
        Ok(result) => {
            state.counters.quotes_computed.fetch_add(1, Relaxed);
            WsMessage::Quote {
                call_price: result.call_price,
                put_price: result.put_price,
                seq: req.seq,
                timestamp: chrono::Utc::now().to_rfc3339(),
            }
        }
        Err(e) => {
            state.counters.quotes_rejected.fetch_add(1, Relaxed);
            WsMessage::Invalid {
                field: e.field(),
                message: e.to_string(),
                seq: req.seq,
            }
        }
    }
}
