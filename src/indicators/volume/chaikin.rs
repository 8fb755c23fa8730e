//! Chaikin accumulation/distribution line

use crate::models::market::MarketBar;
use crate::models::signal::SignalDirection;

/// Money flow multiplier; a zero-range bar contributes nothing
fn money_flow_multiplier(bar: &MarketBar) -> f64 {
    let range = bar.high - bar.low;
    if range == 0.0 {
        return 0.0;
    }
    ((bar.close - bar.low) - (bar.high - bar.close)) / range
}

/// Cumulative A/D value after each bar
pub fn chaikin_ad_series(bars: &[MarketBar]) -> Vec<f64> {
    bars.iter()
        .scan(0.0, |acc, bar| {
            *acc += money_flow_multiplier(bar) * bar.volume;
            Some(*acc)
        })
        .collect()
}

/// Latest A/D value
pub fn chaikin_ad(bars: &[MarketBar]) -> Option<f64> {
    chaikin_ad_series(bars).last().copied()
}

/// Whether the last A/D move agrees with `direction`.
///
/// `None` with fewer than two bars. NEUTRAL needs no confirmation.
pub fn chaikin_confirms(bars: &[MarketBar], direction: SignalDirection) -> Option<bool> {
    if bars.len() < 2 {
        return None;
    }
    let series = chaikin_ad_series(bars);
    let delta = series[series.len() - 1] - series[series.len() - 2];
    Some(match direction {
        SignalDirection::Buy => delta > 0.0,
        SignalDirection::Sell => delta < 0.0,
        SignalDirection::Neutral => true,
    })
}
