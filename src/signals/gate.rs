//! Multi-timeframe confirmation gate

use crate::models::signal::{ProbabilityVector, SignalDirection, BUY, SELL};

/// Minimum 4H probability on the signal side
pub const H4_CONFIRM_THRESHOLD: f64 = 0.60;
/// Maximum D1 probability against the signal
pub const D1_VETO_THRESHOLD: f64 = 0.50;

/// Decide the discrete signal from the 1H, 4H and D1 vectors.
///
/// BUY is checked before SELL; the first branch that holds wins. The rule is
/// memoryless.
pub fn apply_multitimeframe_gate(
    probs_1h: &ProbabilityVector,
    probs_4h: &ProbabilityVector,
    probs_d1: &ProbabilityVector,
    buy_th: f64,
    sell_th: f64,
) -> SignalDirection {
    if probs_1h[BUY] > buy_th
        && probs_4h[BUY] > H4_CONFIRM_THRESHOLD
        && probs_d1[SELL] < D1_VETO_THRESHOLD
    {
        return SignalDirection::Buy;
    }

    if probs_1h[SELL] > sell_th
        && probs_4h[SELL] > H4_CONFIRM_THRESHOLD
        && probs_d1[BUY] < D1_VETO_THRESHOLD
    {
        return SignalDirection::Sell;
    }

    SignalDirection::Neutral
}
