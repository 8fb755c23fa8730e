//! Operational smoke checks of the core engine and a running API

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::Settings;
use crate::core::requests::SignalRequest;
use crate::signals::engine::SignalEngine;

pub const API_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeResult {
    pub ok: bool,
    pub detail: String,
}

impl SmokeResult {
    fn pass(detail: impl Into<String>) -> Self {
        Self {
            ok: true,
            detail: detail.into(),
        }
    }

    fn fail(detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            detail: detail.into(),
        }
    }
}

/// Fixed request exercised by both checks
pub fn default_signal_payload(price: f64) -> Value {
    json!({
        "price": price,
        "atr": 12.0,
        "pattern_quality": 0.8,
        "regime": "trend",
        "d1_probs": [0.55, 0.20, 0.25],
        "votes": [
            { "timeframe": "1H", "probs": [0.70, 0.15, 0.15], "confidence": 0.8, "weight": 1.0 },
            { "timeframe": "4H", "probs": [0.66, 0.18, 0.16], "confidence": 0.8, "weight": 1.0 }
        ],
        "chaikin_ok": true,
        "fundamentals": {
            "usd_index": 100.0,
            "real_yield_10y": 1.0,
            "fed_rate": 4.5,
            "risk_aversion_score": 0.2
        }
    })
}

/// Run the engine in-process on the fixed payload
pub fn smoke_test_core(price: f64) -> SmokeResult {
    let settings = Settings::default();
    let request: SignalRequest = match serde_json::from_value(default_signal_payload(price)) {
        Ok(request) => request,
        Err(e) => return SmokeResult::fail(format!("payload: {}", e)),
    };
    let input = match request.into_input() {
        Ok(input) => input,
        Err(e) => return SmokeResult::fail(format!("validation: {}", e)),
    };

    let engine = SignalEngine::new(settings.clone());
    let output = engine.infer(&input);

    if output.instrument != settings.instrument {
        return SmokeResult::fail(format!("unexpected instrument {}", output.instrument));
    }
    if output.risk_fraction != settings.risk_base {
        return SmokeResult::fail(format!(
            "risk {} differs from base tier {}",
            output.risk_fraction, settings.risk_base
        ));
    }

    SmokeResult::pass(format!(
        "Signal={} conf={:.3}",
        output.signal, output.confidence
    ))
}

/// POST the fixed payload to `{base_url}/signal/xauusd`
pub async fn smoke_test_api(base_url: &str, price: f64) -> SmokeResult {
    let url = format!("{}/signal/xauusd", base_url.trim_end_matches('/'));
    let client = match reqwest::Client::builder().timeout(API_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => return SmokeResult::fail(format!("client: {}", e)),
    };

    let response = match client
        .post(&url)
        .json(&default_signal_payload(price))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %url, error = %e, "API smoke check failed");
            return SmokeResult::fail(format!("request failed: {}", e));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return SmokeResult::fail(format!("HTTP {}", status.as_u16()));
    }

    match response.json::<Value>().await {
        Ok(body) => match body.get("signal").and_then(Value::as_str) {
            Some(signal) => {
                info!(url = %url, signal = %signal, "API smoke check passed");
                SmokeResult::pass(format!("API OK: {}", signal))
            }
            None => SmokeResult::fail("response has no signal"),
        },
        Err(e) => SmokeResult::fail(format!("invalid JSON: {}", e)),
    }
}
