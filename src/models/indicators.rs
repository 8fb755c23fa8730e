use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

/// Indicator readings over the real-time buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub bars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaikin_ad: Option<f64>,
    /// Whether the last A/D move confirms the requested direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaikin_ok: Option<bool>,
    pub timestamp: DateTime<Utc>,
}

impl IndicatorSet {
    pub fn new(symbol: String, bars: usize) -> Self {
        Self {
            symbol,
            bars,
            price: None,
            atr: None,
            rsi: None,
            macd: None,
            chaikin_ad: None,
            chaikin_ok: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_atr(mut self, atr: f64) -> Self {
        self.atr = Some(atr);
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_chaikin_ad(mut self, chaikin_ad: f64) -> Self {
        self.chaikin_ad = Some(chaikin_ad);
        self
    }

    pub fn with_chaikin_ok(mut self, chaikin_ok: bool) -> Self {
        self.chaikin_ok = Some(chaikin_ok);
        self
    }
}
