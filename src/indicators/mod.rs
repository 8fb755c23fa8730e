//! Technical indicators computed over buffered market bars.

pub mod momentum;
pub mod volatility;
pub mod volume;

use crate::models::indicators::IndicatorSet;
use crate::models::market::MarketBar;
use crate::models::signal::SignalDirection;

pub use momentum::macd::calculate_macd_default;
pub use momentum::rsi::calculate_rsi_default;
pub use volatility::atr::calculate_atr_default;
pub use volume::chaikin::{chaikin_ad, chaikin_confirms};

/// Compute every indicator the bars allow; missing readings stay `None`.
///
/// With a `direction`, also reports whether Chaikin A/D confirms it.
pub fn compute_indicator_set(
    symbol: &str,
    bars: &[MarketBar],
    direction: Option<SignalDirection>,
) -> IndicatorSet {
    let mut set = IndicatorSet::new(symbol.to_string(), bars.len());

    if let Some(last) = bars.last() {
        set = set.with_price(last.close);
    }
    if let Some(atr) = calculate_atr_default(bars) {
        set = set.with_atr(atr);
    }
    if let Some(rsi) = calculate_rsi_default(bars) {
        set = set.with_rsi(rsi);
    }
    if let Some(macd) = calculate_macd_default(bars) {
        set = set.with_macd(macd);
    }
    if let Some(ad) = chaikin_ad(bars) {
        set = set.with_chaikin_ad(ad);
    }
    if let Some(ok) = direction.and_then(|d| chaikin_confirms(bars, d)) {
        set = set.with_chaikin_ok(ok);
    }

    set
}
