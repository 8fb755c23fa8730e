//! Probability vector normalization

use crate::models::signal::{ProbabilityVector, CERTAIN_NEUTRAL};

/// Floor used by [`normalize`] so every component stays strictly positive
pub const PROB_FLOOR: f64 = 1e-6;

/// Floor each component at [`PROB_FLOOR`] and rescale to sum to 1.
///
/// Total over finite input: an all-zero vector comes back uniform.
pub fn normalize(v: &ProbabilityVector) -> ProbabilityVector {
    let floored = v.map(|x| x.max(PROB_FLOOR));
    let sum: f64 = floored.iter().sum();
    floored.map(|x| x / sum)
}

/// Floor each component at 0 and rescale to sum to 1.
///
/// Returns certain neutral `(0, 0, 1)` when nothing positive is left.
pub fn normalize_floor0(v: &ProbabilityVector) -> ProbabilityVector {
    let floored = v.map(|x| x.max(0.0));
    let sum: f64 = floored.iter().sum();
    if sum <= 0.0 {
        return CERTAIN_NEUTRAL;
    }
    floored.map(|x| x / sum)
}

/// Largest component of the vector
pub fn max_probability(v: &ProbabilityVector) -> f64 {
    v.iter().copied().fold(f64::MIN, f64::max)
}
