//! Risk sizing and bracket construction

use crate::config::Settings;
use crate::models::signal::{Regime, SignalDirection};

/// Floor applied to ATR so stops never collapse onto the entry
pub const ATR_FLOOR: f64 = 1e-6;
/// Stop distance in ATR units
pub const STOP_ATR_MULTIPLE: f64 = 1.2;
/// Default reward:risk multiple
pub const DEFAULT_RR: f64 = 2.0;
/// Zone half-width in ATR units
pub const ZONE_PAD_ATR: f64 = 0.15;
/// Distance from the first to the second target in ATR units
pub const EXTENDED_TARGET_ATR: f64 = 0.8;

/// Three-level risk step function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTiers {
    pub base: f64,
    pub high: f64,
    pub max: f64,
}

impl Default for RiskTiers {
    fn default() -> Self {
        Self {
            base: 0.01,
            high: 0.02,
            max: 0.03,
        }
    }
}

impl From<&Settings> for RiskTiers {
    fn from(settings: &Settings) -> Self {
        Self {
            base: settings.risk_base,
            high: settings.risk_high,
            max: settings.risk_max,
        }
    }
}

impl RiskTiers {
    /// Account fraction to risk on the trade.
    ///
    /// The top tier overrides the middle one when met; tiers do not add up.
    pub fn fraction(&self, confidence: f64, regime: Regime, pattern_quality: f64) -> f64 {
        let mut risk = self.base;

        if confidence > 0.75
            && pattern_quality > 0.70
            && matches!(regime, Regime::Trend | Regime::Stable)
        {
            risk = self.high;
        }

        if confidence > 0.88 && pattern_quality > 0.85 && regime == Regime::Trend {
            risk = self.max;
        }

        risk.clamp(0.0, self.max)
    }
}

/// [`RiskTiers::fraction`] with the default 1% / 2% / 3% tiers
pub fn risk_fraction(confidence: f64, regime: Regime, pattern_quality: f64) -> f64 {
    RiskTiers::default().fraction(confidence, regime, pattern_quality)
}

/// Profit target as a fraction of entry: 3% at high confidence, else 2%
pub fn profit_target_pct(confidence: f64) -> f64 {
    if confidence >= 0.80 {
        0.03
    } else {
        0.02
    }
}

/// How the take-profit distance is derived from the stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetPolicy {
    /// Target at `rr` times the stop distance
    RMultiple(f64),
    /// Target at a fixed percentage of entry
    Percent(f64),
}

impl Default for TargetPolicy {
    fn default() -> Self {
        TargetPolicy::RMultiple(DEFAULT_RR)
    }
}

/// ATR stop with an R-multiple target. NEUTRAL returns `(entry, entry)`.
pub fn compute_sl_tp(entry: f64, atr: f64, direction: SignalDirection, rr: f64) -> (f64, f64) {
    compute_sl_tp_with_policy(entry, atr, direction, TargetPolicy::RMultiple(rr))
}

pub fn compute_sl_tp_with_policy(
    entry: f64,
    atr: f64,
    direction: SignalDirection,
    policy: TargetPolicy,
) -> (f64, f64) {
    let atr = atr.max(ATR_FLOOR);
    match direction {
        SignalDirection::Buy => {
            let sl = entry - STOP_ATR_MULTIPLE * atr;
            let tp = match policy {
                TargetPolicy::RMultiple(rr) => entry + (entry - sl) * rr,
                TargetPolicy::Percent(pct) => entry * (1.0 + pct),
            };
            (sl, tp)
        }
        SignalDirection::Sell => {
            let sl = entry + STOP_ATR_MULTIPLE * atr;
            let tp = match policy {
                TargetPolicy::RMultiple(rr) => entry - (sl - entry) * rr,
                TargetPolicy::Percent(pct) => entry * (1.0 - pct),
            };
            (sl, tp)
        }
        SignalDirection::Neutral => (entry, entry),
    }
}

/// Padded price zones around entry, stop and target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeZones {
    pub entry_zone: (f64, f64),
    pub stop_zone: (f64, f64),
    pub targets: (f64, f64),
}

/// Build zones from a bracket. The second target extends past the first in
/// the signal direction; a NEUTRAL signal has no direction, so both targets
/// coincide.
pub fn compute_zones(price: f64, atr: f64, direction: SignalDirection, stop_loss: f64, take_profit: f64) -> TradeZones {
    let pad = ZONE_PAD_ATR * atr.max(ATR_FLOOR);
    TradeZones {
        entry_zone: (price - pad, price + pad),
        stop_zone: (stop_loss - pad, stop_loss + pad),
        targets: (
            take_profit,
            take_profit + direction.sign() * EXTENDED_TARGET_ATR * atr,
        ),
    }
}
