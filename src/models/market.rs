use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar as ingested from the API or a live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default = "default_bar_source")]
    pub source: String,
}

fn default_bar_source() -> String {
    "realtime".to_string()
}

impl MarketBar {
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            source: default_bar_source(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Top-of-book quote from a price provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl PriceTick {
    /// Tick with bid, ask and last all set to `price`.
    pub fn flat(symbol: &str, price: f64, timestamp: DateTime<Utc>, source: impl Into<String>) -> Self {
        Self {
            symbol: symbol.to_string(),
            bid: price,
            ask: price,
            last: price,
            timestamp,
            source: source.into(),
        }
    }
}
