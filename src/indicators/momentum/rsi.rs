//! RSI (Relative Strength Index) indicator

use crate::models::market::MarketBar;

/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss over
/// the last `period` closes
pub fn calculate_rsi(bars: &[MarketBar], period: u32) -> Option<f64> {
    if period == 0 || bars.len() < period as usize + 1 {
        return None;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = bars
        .windows(2)
        .map(|w| {
            let change = w[1].close - w[0].close;
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let avg_gain: f64 = gains.iter().rev().take(period as usize).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period as usize).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[MarketBar]) -> Option<f64> {
    calculate_rsi(bars, 14)
}
