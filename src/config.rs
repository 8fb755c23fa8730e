//! Process configuration read from the environment (`.env` is loaded by the binaries)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Get the runtime environment name (`APP_ENV`), defaulting to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Engine settings. Read-only for the lifetime of a [`crate::signals::SignalEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub instrument: String,
    pub lookback_bars: usize,
    pub risk_base: f64,
    pub risk_high: f64,
    pub risk_max: f64,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
    pub neutral_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instrument: "XAUUSD".to_string(),
            lookback_bars: 128,
            risk_base: 0.01,
            risk_high: 0.02,
            risk_max: 0.03,
            buy_threshold: 0.62,
            sell_threshold: 0.62,
            neutral_threshold: 0.50,
        }
    }
}

impl Settings {
    /// Defaults overridden by `XAU_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            instrument: env::var("XAU_INSTRUMENT").unwrap_or(defaults.instrument),
            lookback_bars: env_or("XAU_LOOKBACK_BARS", defaults.lookback_bars),
            risk_base: env_or("XAU_RISK_BASE", defaults.risk_base),
            risk_high: env_or("XAU_RISK_HIGH", defaults.risk_high),
            risk_max: env_or("XAU_RISK_MAX", defaults.risk_max),
            buy_threshold: env_or("XAU_BUY_THRESHOLD", defaults.buy_threshold),
            sell_threshold: env_or("XAU_SELL_THRESHOLD", defaults.sell_threshold),
            neutral_threshold: env_or("XAU_NEUTRAL_THRESHOLD", defaults.neutral_threshold),
        }
    }
}

/// Settings for the HTTP service and its collaborators
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub buffer_capacity: usize,
    pub trainer_poll_ms: u64,
    pub fallback_price: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            data_dir: PathBuf::from("data"),
            buffer_capacity: 5000,
            trainer_poll_ms: 1000,
            fallback_price: 2300.0,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            data_dir: env::var("XAU_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            buffer_capacity: env_or("XAU_BUFFER_CAPACITY", defaults.buffer_capacity),
            trainer_poll_ms: env_or("XAU_TRAINER_POLL_MS", defaults.trainer_poll_ms),
            fallback_price: env_or("XAU_FALLBACK_PRICE", defaults.fallback_price),
        }
    }

    pub fn realtime_path(&self) -> PathBuf {
        self.data_dir.join("realtime_xauusd.ndjson")
    }

    pub fn experience_path(&self) -> PathBuf {
        self.data_dir.join("experiences.ndjson")
    }

    pub fn tradingview_path(&self) -> PathBuf {
        self.data_dir.join("tradingview_analysis.ndjson")
    }
}
