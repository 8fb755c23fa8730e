use serde::{Deserialize, Serialize};

use crate::models::signal::ProbabilityVector;

/// One model's opinion for a single timeframe.
///
/// `probs` is the raw `[buy, sell, neutral]` triple as produced upstream; it is
/// not required to sum to 1 and is normalized by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeVote {
    pub timeframe: String,
    pub probs: ProbabilityVector,
    pub confidence: f64,
    pub weight: f64,
}

impl TimeframeVote {
    pub fn new(timeframe: impl Into<String>, probs: ProbabilityVector, confidence: f64, weight: f64) -> Self {
        Self {
            timeframe: timeframe.into(),
            probs,
            confidence,
            weight,
        }
    }

    /// Find the probabilities voted for `timeframe`, if any vote carries that label.
    pub fn probs_for<'a>(votes: &'a [TimeframeVote], timeframe: &str) -> Option<&'a ProbabilityVector> {
        votes
            .iter()
            .find(|v| v.timeframe == timeframe)
            .map(|v| &v.probs)
    }
}
