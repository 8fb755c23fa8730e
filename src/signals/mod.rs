//! Signal decision pipeline.

pub mod adjustment;
pub mod aggregation;
pub mod engine;
pub mod fundamental;
pub mod gate;
pub mod risk;
pub mod scoring;

pub use adjustment::apply_bias_and_volume_confirmation;
pub use aggregation::weighted_vote;
pub use engine::{SignalBreakdown, SignalEngine, SignalInput};
pub use fundamental::compute_fundamental_bias;
pub use gate::apply_multitimeframe_gate;
pub use risk::{compute_sl_tp, profit_target_pct, risk_fraction, RiskTiers, TargetPolicy};
pub use scoring::{normalize, normalize_floor0};
