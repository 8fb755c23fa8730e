//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;
use crate::models::market::MarketBar;

/// MACD = EMA(fast) - EMA(slow), Signal = EMA(signal) of MACD,
/// Histogram = MACD - Signal
pub fn calculate_macd(
    bars: &[MarketBar],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if bars.len() < slow_period as usize + signal_period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);

    let macd_values: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_values = math::ema_series(&macd_values, signal_period as usize);

    let macd = *macd_values.last()?;
    let signal = *signal_values.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[MarketBar]) -> Option<MacdIndicator> {
    calculate_macd(bars, 12, 26, 9)
}
