//! Confidence-weighted consensus across timeframe votes

use crate::models::signal::{ProbabilityVector, CERTAIN_NEUTRAL};
use crate::models::vote::TimeframeVote;
use crate::signals::scoring::normalize_floor0;

/// Effective weight of a vote: stated weight scaled by confidence, never negative
pub fn effective_weight(vote: &TimeframeVote) -> f64 {
    (vote.weight * vote.confidence).max(0.0)
}

/// Blend votes into one consensus vector.
///
/// Convex combination of the normalized votes, so the result stays on the
/// simplex. No votes, or no positive weight, yields certain neutral.
pub fn weighted_vote(votes: &[TimeframeVote]) -> ProbabilityVector {
    if votes.is_empty() {
        return CERTAIN_NEUTRAL;
    }

    let mut num = [0.0; 3];
    let mut den = 0.0;
    for vote in votes {
        let w = effective_weight(vote);
        let p = normalize_floor0(&vote.probs);
        for i in 0..3 {
            num[i] += w * p[i];
        }
        den += w;
    }

    if den <= 0.0 {
        return CERTAIN_NEUTRAL;
    }

    normalize_floor0(&num.map(|x| x / den))
}
