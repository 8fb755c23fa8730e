//! Unit tests for the multi-timeframe gate

use xausignal::models::signal::SignalDirection;
use xausignal::signals::gate::apply_multitimeframe_gate;

const TH: f64 = 0.62;

#[test]
fn test_buy_when_all_timeframes_agree() {
    let signal = apply_multitimeframe_gate(
        &[0.70, 0.15, 0.15],
        &[0.66, 0.18, 0.16],
        &[0.55, 0.20, 0.25],
        TH,
        TH,
    );
    assert_eq!(signal, SignalDirection::Buy);
}

#[test]
fn test_sell_when_all_timeframes_agree() {
    let signal = apply_multitimeframe_gate(
        &[0.10, 0.75, 0.15],
        &[0.20, 0.65, 0.15],
        &[0.30, 0.40, 0.30],
        TH,
        TH,
    );
    assert_eq!(signal, SignalDirection::Sell);
}

#[test]
fn test_d1_veto_blocks_buy() {
    let signal = apply_multitimeframe_gate(
        &[0.70, 0.15, 0.15],
        &[0.66, 0.18, 0.16],
        &[0.20, 0.50, 0.30],
        TH,
        TH,
    );
    assert_eq!(signal, SignalDirection::Neutral);
}

#[test]
fn test_weak_4h_blocks_buy() {
    let signal = apply_multitimeframe_gate(
        &[0.70, 0.15, 0.15],
        &[0.60, 0.20, 0.20],
        &[0.40, 0.30, 0.30],
        TH,
        TH,
    );
    assert_eq!(signal, SignalDirection::Neutral);
}

#[test]
fn test_thresholds_are_strict() {
    let signal = apply_multitimeframe_gate(
        &[0.62, 0.19, 0.19],
        &[0.70, 0.15, 0.15],
        &[0.40, 0.30, 0.30],
        TH,
        TH,
    );
    assert_eq!(signal, SignalDirection::Neutral);
}

#[test]
fn test_gate_ignores_neutral_column() {
    let a = apply_multitimeframe_gate(&[0.7, 0.1, 0.2], &[0.7, 0.1, 0.2], &[0.3, 0.3, 0.4], TH, TH);
    let b = apply_multitimeframe_gate(&[0.7, 0.1, 9.0], &[0.7, 0.1, 9.0], &[0.3, 0.3, 9.0], TH, TH);
    assert_eq!(a, b);
}
