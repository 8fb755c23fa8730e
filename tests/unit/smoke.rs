//! Unit tests for the in-process smoke check

use xausignal::core::requests::SignalRequest;
use xausignal::models::signal::SignalDirection;
use xausignal::signals::engine::SignalEngine;
use xausignal::smoke::{default_signal_payload, smoke_test_core};

#[test]
fn test_default_payload_is_a_valid_request() {
    let request: SignalRequest = serde_json::from_value(default_signal_payload(2300.0)).unwrap();
    assert!(request.into_input().is_ok());
}

#[test]
fn test_default_payload_stays_in_base_risk_tier() {
    let request: SignalRequest = serde_json::from_value(default_signal_payload(2300.0)).unwrap();
    let input = request.into_input().unwrap();
    let breakdown = SignalEngine::default().infer_detailed(&input);

    assert!((breakdown.fundamental_bias + 0.28).abs() < 1e-9);
    assert_eq!(breakdown.output.signal, SignalDirection::Buy);
    // buy 0.666 over a total of 1.0084 after the bias tilt
    assert!((breakdown.output.confidence - 0.666 / 1.0084).abs() < 1e-6);
    assert_eq!(breakdown.output.risk_fraction, 0.01);
}

#[test]
fn test_core_smoke_passes() {
    let result = smoke_test_core(2300.0);
    assert!(result.ok, "{}", result.detail);
    assert_eq!(result.detail, "Signal=BUY conf=0.660");
}

#[test]
fn test_core_smoke_rejects_bad_price() {
    let result = smoke_test_core(-1.0);
    assert!(!result.ok);
    assert!(result.detail.starts_with("validation"));
}
