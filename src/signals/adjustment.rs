//! Fundamental bias and volume-confirmation reshaping of the consensus vector

use crate::models::signal::{ProbabilityVector, SignalDirection, BUY, NEUTRAL, SELL};
use crate::signals::scoring::normalize;

pub const BIAS_BOOST: f64 = 0.08;
pub const BIAS_DAMP: f64 = 0.05;
pub const UNCONFIRMED_NEUTRAL_BOOST: f64 = 0.12;
pub const UNCONFIRMED_SIDE_PENALTY: f64 = 0.08;

/// Apply the bias tilt, then the missing-confirmation penalty, then
/// re-normalize with the positive floor.
///
/// Both adjustments land before the single normalization, so they may
/// partially cancel.
pub fn apply_bias_and_volume_confirmation(
    probs: &ProbabilityVector,
    signal: SignalDirection,
    fundamental_bias: f64,
    volume_confirmed: bool,
) -> ProbabilityVector {
    let mut adj = *probs;

    if fundamental_bias > 0.0 {
        adj[BUY] += BIAS_BOOST * fundamental_bias;
        adj[SELL] -= BIAS_DAMP * fundamental_bias;
    } else if fundamental_bias < 0.0 {
        let f = fundamental_bias.abs();
        adj[SELL] += BIAS_BOOST * f;
        adj[BUY] -= BIAS_DAMP * f;
    }

    if !volume_confirmed {
        match signal {
            SignalDirection::Buy => {
                adj[NEUTRAL] += UNCONFIRMED_NEUTRAL_BOOST;
                adj[BUY] -= UNCONFIRMED_SIDE_PENALTY;
            }
            SignalDirection::Sell => {
                adj[NEUTRAL] += UNCONFIRMED_NEUTRAL_BOOST;
                adj[SELL] -= UNCONFIRMED_SIDE_PENALTY;
            }
            SignalDirection::Neutral => {}
        }
    }

    normalize(&adj)
}
