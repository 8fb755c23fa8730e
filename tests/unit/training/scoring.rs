//! Unit tests for reward shaping and model promotion

use xausignal::training::promotion::{gating_decision, DEFAULT_MAX_MDD_DETERIORATION};
use xausignal::training::reward::{trade_reward, RewardWeights};

#[test]
fn test_trade_reward_penalties() {
    assert!((trade_reward(0.02, 0.0, 0.0, 0.0) - 0.02).abs() < 1e-12);
    let r = trade_reward(0.02, 0.01, 0.005, 1.0);
    assert!((r - (0.02 - 0.005 - 0.001 - 0.2)).abs() < 1e-12);
}

#[test]
fn test_custom_reward_weights() {
    let weights = RewardWeights {
        regime_mismatch: 0.0,
        ..RewardWeights::default()
    };
    assert!((weights.reward(0.01, 0.0, 0.0, 1.0) - 0.01).abs() < 1e-12);
}

#[test]
fn test_promotion_requires_sharpe_not_worse() {
    let decision = gating_decision(1.2, 1.1, 0.10, 0.10, DEFAULT_MAX_MDD_DETERIORATION);
    assert!(!decision.promoted);
    assert_eq!(decision.reason, "Sharpe degraded");
}

#[test]
fn test_promotion_rejects_drawdown_deterioration() {
    let decision = gating_decision(1.2, 1.3, 0.10, 0.15, DEFAULT_MAX_MDD_DETERIORATION);
    assert!(!decision.promoted);
    assert_eq!(decision.reason, "Max drawdown degraded");
}

#[test]
fn test_challenger_promoted() {
    let decision = gating_decision(1.2, 1.25, 0.10, 0.11, DEFAULT_MAX_MDD_DETERIORATION);
    assert!(decision.promoted);
    assert_eq!(decision.reason, "Challenger model promoted");
}
