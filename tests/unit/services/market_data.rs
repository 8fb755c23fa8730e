//! Unit tests for price providers and the fallback chain

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use xausignal::integrations::broker::UnavailableBroker;
use xausignal::models::market::{MarketBar, PriceTick};
use xausignal::services::market_data::{
    BrokerPriceProvider, BufferPriceProvider, CompositePriceProvider, FixedPriceProvider,
    PriceProvider,
};
use xausignal::services::realtime::RealTimeBuffer;

struct SlowProvider;

#[async_trait]
impl PriceProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn get_tick(&self, symbol: &str) -> Option<PriceTick> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Some(PriceTick::flat(symbol, 9999.0, Utc::now(), "slow"))
    }
}

#[tokio::test]
async fn test_fixed_provider() {
    let tick = FixedPriceProvider::new(2300.0).get_tick("XAUUSD").await.unwrap();
    assert_eq!(tick.last, 2300.0);
    assert_eq!(tick.bid, tick.ask);
    assert_eq!(tick.symbol, "XAUUSD");
}

#[tokio::test]
async fn test_buffer_provider_uses_last_close() {
    let buffer = Arc::new(RealTimeBuffer::new(10));
    let provider = BufferPriceProvider::new(buffer.clone());
    assert!(provider.get_tick("XAUUSD").await.is_none());

    buffer
        .append(MarketBar::new(Utc::now(), 1.0, 2.0, 0.5, 2310.5, 1.0).with_source("mt5"))
        .await
        .unwrap();
    let tick = provider.get_tick("XAUUSD").await.unwrap();
    assert_eq!(tick.last, 2310.5);
    assert_eq!(tick.source, "buffer:mt5");
}

#[tokio::test]
async fn test_broker_provider_without_terminal() {
    let provider = BrokerPriceProvider::new(Arc::new(UnavailableBroker));
    assert!(provider.get_tick("XAUUSD").await.is_none());
}

#[tokio::test]
async fn test_composite_falls_through_to_first_positive() {
    let composite = CompositePriceProvider::new(vec![
        Arc::new(BrokerPriceProvider::new(Arc::new(UnavailableBroker))),
        Arc::new(FixedPriceProvider::new(0.0)),
        Arc::new(FixedPriceProvider::with_source(2305.0, "fallback")),
        Arc::new(FixedPriceProvider::new(1.0)),
    ]);
    let tick = composite.get_tick("XAUUSD").await.unwrap();
    assert_eq!(tick.last, 2305.0);
    assert_eq!(tick.source, "fallback");
}

#[tokio::test]
async fn test_composite_skips_slow_provider() {
    let composite = CompositePriceProvider::new(vec![
        Arc::new(SlowProvider),
        Arc::new(FixedPriceProvider::new(2300.0)),
    ])
    .with_timeout(Duration::from_millis(20));
    let tick = composite.get_tick("XAUUSD").await.unwrap();
    assert_eq!(tick.last, 2300.0);
}

#[tokio::test]
async fn test_composite_empty_chain_has_no_price() {
    let composite = CompositePriceProvider::new(Vec::new());
    assert!(composite.get_tick("XAUUSD").await.is_none());
}
