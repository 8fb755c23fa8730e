//! Shared data models spanning the engine layers.

pub mod fundamentals;
pub mod indicators;
pub mod market;
pub mod signal;
pub mod vote;

pub use fundamentals::FundamentalSnapshot;
pub use indicators::{IndicatorSet, MacdIndicator};
pub use market::{MarketBar, PriceTick};
pub use signal::{ProbabilityVector, Regime, SignalDirection, SignalOutput};
pub use vote::TimeframeVote;
