use crate::state::{AppState, QuoteRequest};
use axum::extract::State;
use axum::response::{Html, Json};
use portable_atomic::Ordering::Relaxed;
use std::sync::Arc;

/// GET / -- the quote form (embedded, no assets on disk)
pub async fn index() -> Html<&'static str> {
    Html(FORM_HTML)
}

/// POST /api/price -- one-shot pricing for non-WS clients
pub async fn post_price(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> Json<serde_json::Value> {
    match state.pricer.price(&req.inputs()) {
        Ok(result) => {
            state.counters.quotes_computed.fetch_add(1, Relaxed);
            Json(serde_json::json!({
                "call_price": result.call_price,
                "put_price": result.put_price,
            }))
        }
        Err(e) => {
            state.counters.quotes_rejected.fetch_add(1, Relaxed);
            Json(serde_json::json!({ "error": e.to_string(), "field": e.field() }))
        }
    }
}

/// GET /api/counters -- process counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "quotes_computed": state.counters.quotes_computed.load(Relaxed),
        "quotes_rejected": state.counters.quotes_rejected.load(Relaxed),
        "ws_messages_sent": state.counters.ws_messages_sent.load(Relaxed),
    }))
}

const FORM_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Black-Scholes Option Pricing</title>
  <style>
    :root {
      --bg: #070a0f;
      --panel: #11161f;
      --border: #263241;
      --fg: #d8e0ea;
      --muted: #8ea1b8;
      --call: #19d8a8;
      --put: #2fb2ff;
      --danger: #ff7a7a;
      --mono: "JetBrains Mono", "SFMono-Regular", Menlo, Consolas, monospace;
      --sans: "IBM Plex Sans", "Segoe UI", Helvetica, Arial, sans-serif;
    }
    * { box-sizing: border-box; }
    body {
      margin: 0;
      color: var(--fg);
      font-family: var(--sans);
      background: linear-gradient(180deg, #06080c 0%, #070a0f 100%);
      min-height: 100vh;
      display: flex;
      justify-content: center;
      padding: 28px 12px;
    }
    .card {
      width: 100%;
      max-width: 460px;
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 20px 24px 24px;
    }
    h1 {
      font-size: 17px;
      letter-spacing: 0.06em;
      text-transform: uppercase;
      color: var(--muted);
      text-align: center;
      margin: 0 0 18px;
    }
    label {
      display: block;
      font-size: 12px;
      color: var(--muted);
      margin: 12px 0 4px;
    }
    label .val { float: right; font-family: var(--mono); color: var(--fg); }
    input[type="number"] {
      width: 100%;
      background: #0d141d;
      color: var(--fg);
      border: 1px solid var(--border);
      border-radius: 6px;
      padding: 6px 9px;
      font-family: var(--mono);
      font-size: 13px;
    }
    input[type="range"] { width: 100%; accent-color: var(--put); }
    .err {
      font-size: 11px;
      color: var(--danger);
      min-height: 14px;
      margin-top: 2px;
      font-family: var(--mono);
    }
    .prices {
      margin-top: 20px;
      border-top: 1px solid var(--border);
      padding-top: 14px;
      text-align: center;
    }
    .prices div { font-size: 18px; font-family: var(--mono); margin: 6px 0; }
    #call-price { color: var(--call); }
    #put-price { color: var(--put); }
    #conn { font-size: 11px; color: var(--muted); text-align: right; margin-top: 10px; }
  </style>
</head>
<body>
  <div class="card">
    <h1>Black-Scholes Option Pricing</h1>

    <label for="spot">Spot Price (S0)</label>
    <input id="spot" type="number" value="100" step="1" />
    <div class="err" id="spot-err"></div>

    <label for="strike">Strike Price (X)</label>
    <input id="strike" type="number" value="100" step="1" />
    <div class="err" id="strike-err"></div>

    <label for="time_to_expiry">Time to Expiration (years)</label>
    <input id="time_to_expiry" type="number" value="1" step="0.01" />
    <div class="err" id="time_to_expiry-err"></div>

    <label for="risk_free_rate">Risk-Free Interest Rate (r)<span class="val" id="rate-val">0.05</span></label>
    <input id="risk_free_rate" type="range" min="0" max="0.2" step="0.01" value="0.05" />
    <div class="err" id="risk_free_rate-err"></div>

    <label for="volatility">Volatility (&sigma;)<span class="val" id="vol-val">0.20</span></label>
    <input id="volatility" type="range" min="0.01" max="1.0" step="0.01" value="0.2" />
    <div class="err" id="volatility-err"></div>

    <div class="prices">
      <div id="call-price">Call Option Price: $-</div>
      <div id="put-price">Put Option Price: $-</div>
    </div>
    <div id="conn">connecting...</div>
  </div>

  <script>
    const FIELDS = ['spot', 'strike', 'time_to_expiry', 'risk_free_rate', 'volatility'];
    const conn = document.getElementById('conn');
    let seq = 0;
    let socket = null;

    function readInputs() {
      const out = { seq: ++seq };
      for (const f of FIELDS) {
        out[f] = parseFloat(document.getElementById(f).value);
      }
      return out;
    }

    function clearErrors() {
      for (const f of FIELDS) {
        document.getElementById(f + '-err').textContent = '';
      }
    }

    function render(msg) {
      // Drop stale replies: only the most recently sent request may paint.
      if (msg.seq !== seq) return;
      clearErrors();
      if (msg.type === 'quote') {
        document.getElementById('call-price').textContent =
          'Call Option Price: $' + msg.call_price.toFixed(2);
        document.getElementById('put-price').textContent =
          'Put Option Price: $' + msg.put_price.toFixed(2);
      } else if (msg.type === 'invalid') {
        const slot = document.getElementById(msg.field + '-err');
        if (slot) slot.textContent = msg.message;
        document.getElementById('call-price').textContent = 'Call Option Price: $-';
        document.getElementById('put-price').textContent = 'Put Option Price: $-';
      }
    }

    async function recompute() {
      document.getElementById('rate-val').textContent =
        parseFloat(document.getElementById('risk_free_rate').value).toFixed(2);
      document.getElementById('vol-val').textContent =
        parseFloat(document.getElementById('volatility').value).toFixed(2);

      const req = readInputs();
      for (const f of FIELDS) {
        if (!Number.isFinite(req[f])) {
          render({ type: 'invalid', field: f, message: 'enter a number', seq: req.seq });
          return;
        }
      }
      if (socket && socket.readyState === WebSocket.OPEN) {
        socket.send(JSON.stringify(req));
        return;
      }
      // HTTP fallback when the socket is down
      try {
        const res = await fetch('/api/price', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(req),
        });
        const body = await res.json();
        if (body.error) {
          render({ type: 'invalid', field: body.field, message: body.error, seq: req.seq });
        } else {
          render({ type: 'quote', call_price: body.call_price, put_price: body.put_price, seq: req.seq });
        }
      } catch (_) {}
    }

    function connect() {
      const protocol = location.protocol === 'https:' ? 'wss' : 'ws';
      socket = new WebSocket(`${protocol}://${location.host}/ws`);
      socket.onopen = () => { conn.textContent = 'live'; recompute(); };
      socket.onmessage = (event) => {
        try { render(JSON.parse(event.data)); } catch (_) {}
      };
      socket.onclose = () => {
        conn.textContent = 'disconnected, retrying...';
        setTimeout(connect, 1000);
      };
      socket.onerror = () => { conn.textContent = 'ws error'; };
    }

    for (const f of FIELDS) {
      document.getElementById(f).addEventListener('input', recompute);
    }
    connect();
  </script>
</body>
</html>
"#;
