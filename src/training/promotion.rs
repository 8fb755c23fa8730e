//! Champion/challenger promotion gate

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_MDD_DETERIORATION: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionDecision {
    pub promoted: bool,
    pub reason: String,
}

impl PromotionDecision {
    fn reject(reason: &str) -> Self {
        Self {
            promoted: false,
            reason: reason.to_string(),
        }
    }
}

/// Promote the challenger only if Sharpe does not drop and max drawdown does
/// not worsen by more than `max_mdd_deterioration`.
pub fn gating_decision(
    sharpe_old: f64,
    sharpe_new: f64,
    mdd_old: f64,
    mdd_new: f64,
    max_mdd_deterioration: f64,
) -> PromotionDecision {
    if sharpe_new < sharpe_old {
        return PromotionDecision::reject("Sharpe degraded");
    }
    if (mdd_new - mdd_old) > max_mdd_deterioration {
        return PromotionDecision::reject("Max drawdown degraded");
    }
    PromotionDecision {
        promoted: true,
        reason: "Challenger model promoted".to_string(),
    }
}
