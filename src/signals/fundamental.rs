//! Macro bias score for gold

use crate::models::fundamentals::FundamentalSnapshot;

/// Indicator weights of the bias score
pub struct FundamentalWeights;

impl FundamentalWeights {
    pub const USD_INDEX: f64 = 0.35;
    pub const REAL_YIELD: f64 = 0.35;
    pub const FED_RATE: f64 = 0.15;
    pub const RISK_AVERSION: f64 = 0.15;

    pub fn verify() -> bool {
        (Self::USD_INDEX + Self::REAL_YIELD + Self::FED_RATE + Self::RISK_AVERSION - 1.0).abs() < 0.001
    }
}

/// Signed bias in [-1, 1]; positive favors a bullish gold view.
///
/// Weighted mean over the indicators that are present. An empty snapshot
/// scores exactly 0.0.
pub fn compute_fundamental_bias(snapshot: &FundamentalSnapshot) -> f64 {
    let mut score = 0.0;
    let mut weight = 0.0;

    // Strong dollar weighs on gold
    if let Some(usd_index) = snapshot.usd_index {
        score += -FundamentalWeights::USD_INDEX * ((usd_index - 100.0) / 10.0);
        weight += FundamentalWeights::USD_INDEX;
    }

    // High real yields raise the opportunity cost of holding gold
    if let Some(real_yield) = snapshot.real_yield_10y {
        score += -FundamentalWeights::REAL_YIELD * (real_yield / 2.0);
        weight += FundamentalWeights::REAL_YIELD;
    }

    if let Some(fed_rate) = snapshot.fed_rate {
        score += -FundamentalWeights::FED_RATE * (fed_rate / 5.0);
        weight += FundamentalWeights::FED_RATE;
    }

    // Safe-haven demand
    if let Some(risk_aversion) = snapshot.risk_aversion_score {
        score += FundamentalWeights::RISK_AVERSION * risk_aversion;
        weight += FundamentalWeights::RISK_AVERSION;
    }

    if weight == 0.0 {
        return 0.0;
    }

    (score / weight).clamp(-1.0, 1.0)
}
