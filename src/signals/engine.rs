//! Signal engine: consensus, gate, adjustment, risk and zones in one pass.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::models::fundamentals::FundamentalSnapshot;
use crate::models::signal::{ProbabilityVector, Regime, SignalOutput};
use crate::models::vote::TimeframeVote;
use crate::signals::adjustment::apply_bias_and_volume_confirmation;
use crate::signals::aggregation::weighted_vote;
use crate::signals::fundamental::compute_fundamental_bias;
use crate::signals::gate::apply_multitimeframe_gate;
use crate::signals::risk::{compute_sl_tp_with_policy, compute_zones, RiskTiers, TargetPolicy};
use crate::signals::scoring::max_probability;

pub const TIMEFRAME_1H: &str = "1H";
pub const TIMEFRAME_4H: &str = "4H";

/// Everything one inference call needs. Shape is validated by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalInput {
    pub price: f64,
    pub atr: f64,
    pub votes: Vec<TimeframeVote>,
    pub d1_probs: ProbabilityVector,
    pub pattern_quality: f64,
    pub regime: Regime,
    pub fundamentals: Option<FundamentalSnapshot>,
    /// Chaikin volume confirmation of the move
    pub chaikin_ok: bool,
}

/// Intermediate values of one inference, kept for logging and tests
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBreakdown {
    pub consensus: ProbabilityVector,
    pub fundamental_bias: f64,
    pub adjusted: ProbabilityVector,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub output: SignalOutput,
}

pub struct SignalEngine {
    settings: Settings,
    tiers: RiskTiers,
    target_policy: TargetPolicy,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SignalEngine {
    pub fn new(settings: Settings) -> Self {
        let tiers = RiskTiers::from(&settings);
        Self {
            settings,
            tiers,
            target_policy: TargetPolicy::default(),
        }
    }

    /// Swap the R-multiple target for another policy
    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn infer(&self, input: &SignalInput) -> SignalOutput {
        self.infer_detailed(input).output
    }

    pub fn infer_detailed(&self, input: &SignalInput) -> SignalBreakdown {
        let consensus = weighted_vote(&input.votes);

        // Missing 1H/4H votes fall back to the consensus vector
        let probs_1h = TimeframeVote::probs_for(&input.votes, TIMEFRAME_1H).unwrap_or(&consensus);
        let probs_4h = TimeframeVote::probs_for(&input.votes, TIMEFRAME_4H).unwrap_or(&consensus);
        let signal = apply_multitimeframe_gate(
            probs_1h,
            probs_4h,
            &input.d1_probs,
            self.settings.buy_threshold,
            self.settings.sell_threshold,
        );

        let fundamental_bias = input
            .fundamentals
            .as_ref()
            .map(compute_fundamental_bias)
            .unwrap_or(0.0);
        let adjusted =
            apply_bias_and_volume_confirmation(&consensus, signal, fundamental_bias, input.chaikin_ok);

        let confidence = max_probability(&adjusted);
        let risk_fraction = self
            .tiers
            .fraction(confidence, input.regime, input.pattern_quality);
        let (stop_loss, take_profit) =
            compute_sl_tp_with_policy(input.price, input.atr, signal, self.target_policy);
        let zones = compute_zones(input.price, input.atr, signal, stop_loss, take_profit);

        debug!(
            instrument = %self.settings.instrument,
            signal = %signal,
            confidence = confidence,
            fundamental_bias = fundamental_bias,
            risk_fraction = risk_fraction,
            regime = %input.regime,
            "SignalEngine: inferred {} with confidence {:.3}",
            signal,
            confidence
        );

        SignalBreakdown {
            consensus,
            fundamental_bias,
            adjusted,
            stop_loss,
            take_profit,
            output: SignalOutput {
                instrument: self.settings.instrument.clone(),
                signal,
                confidence,
                entry_zone: zones.entry_zone,
                stop_zone: zones.stop_zone,
                targets: zones.targets,
                risk_fraction,
            },
        }
    }
}
