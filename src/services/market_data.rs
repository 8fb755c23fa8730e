//! Price providers and their fallback chain.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::integrations::broker::BrokerBridge;
use crate::models::market::PriceTick;
use crate::services::realtime::RealTimeBuffer;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(2);

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Current tick for `symbol`, or `None` when this source has nothing
    async fn get_tick(&self, symbol: &str) -> Option<PriceTick>;
}

/// Uses the last buffered close as the current price
pub struct BufferPriceProvider {
    buffer: Arc<RealTimeBuffer>,
}

impl BufferPriceProvider {
    pub fn new(buffer: Arc<RealTimeBuffer>) -> Self {
        Self { buffer }
    }
}

#[async_trait]
impl PriceProvider for BufferPriceProvider {
    fn name(&self) -> &str {
        "buffer"
    }

    async fn get_tick(&self, symbol: &str) -> Option<PriceTick> {
        let bar = self.buffer.latest(1).await.pop()?;
        Some(PriceTick::flat(
            symbol,
            bar.close,
            bar.timestamp,
            format!("buffer:{}", bar.source),
        ))
    }
}

/// Constant price, for development and as the last link of a chain
pub struct FixedPriceProvider {
    price: f64,
    source: String,
}

impl FixedPriceProvider {
    pub fn new(price: f64) -> Self {
        Self::with_source(price, "fixed")
    }

    pub fn with_source(price: f64, source: impl Into<String>) -> Self {
        Self {
            price,
            source: source.into(),
        }
    }
}

#[async_trait]
impl PriceProvider for FixedPriceProvider {
    fn name(&self) -> &str {
        &self.source
    }

    async fn get_tick(&self, symbol: &str) -> Option<PriceTick> {
        Some(PriceTick::flat(symbol, self.price, Utc::now(), self.source.clone()))
    }
}

/// Ticks straight from the broker terminal
pub struct BrokerPriceProvider {
    bridge: Arc<dyn BrokerBridge>,
}

impl BrokerPriceProvider {
    pub fn new(bridge: Arc<dyn BrokerBridge>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl PriceProvider for BrokerPriceProvider {
    fn name(&self) -> &str {
        "broker"
    }

    async fn get_tick(&self, symbol: &str) -> Option<PriceTick> {
        self.bridge.get_tick(symbol)
    }
}

/// Tries providers in order and returns the first tick with a positive price
pub struct CompositePriceProvider {
    providers: Vec<Arc<dyn PriceProvider>>,
    per_provider_timeout: Duration,
}

impl CompositePriceProvider {
    pub fn new(providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self {
            providers,
            per_provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, per_provider_timeout: Duration) -> Self {
        self.per_provider_timeout = per_provider_timeout;
        self
    }
}

#[async_trait]
impl PriceProvider for CompositePriceProvider {
    fn name(&self) -> &str {
        "composite"
    }

    async fn get_tick(&self, symbol: &str) -> Option<PriceTick> {
        for provider in &self.providers {
            match timeout(self.per_provider_timeout, provider.get_tick(symbol)).await {
                Ok(Some(tick)) if tick.last > 0.0 => {
                    debug!(provider = provider.name(), symbol = %symbol, last = tick.last, "Price resolved");
                    return Some(tick);
                }
                Ok(_) => {
                    debug!(provider = provider.name(), symbol = %symbol, "No usable tick, trying next provider");
                }
                Err(_) => {
                    warn!(provider = provider.name(), symbol = %symbol, "Price provider timed out");
                }
            }
        }
        None
    }
}
