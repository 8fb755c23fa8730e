//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::market::MarketBar;

/// Simple average of the last `period` true ranges
pub fn calculate_atr(bars: &[MarketBar], period: u32) -> Option<f64> {
    if bars.len() < period as usize + 1 {
        return None;
    }

    let tr_values: Vec<f64> = bars
        .windows(2)
        .map(|w| math::true_range(w[1].high, w[1].low, w[0].close))
        .collect();

    math::sma(&tr_values, period as usize)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(bars: &[MarketBar]) -> Option<f64> {
    calculate_atr(bars, 14)
}
