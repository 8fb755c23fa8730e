//! Broker order-submission bridge

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::BrokerError;
use crate::models::market::PriceTick;
use crate::models::signal::SignalDirection;

pub const DEFAULT_DEVIATION: u32 = 20;
pub const DEFAULT_MAGIC: u64 = 20260221;

/// Market order with an attached bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: SignalDirection,
    pub lot: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub deviation: u32,
    pub magic: u64,
    pub comment: String,
}

impl OrderRequest {
    pub fn new(symbol: impl Into<String>, side: SignalDirection, lot: f64, stop_loss: f64, take_profit: f64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            lot,
            stop_loss,
            take_profit,
            deviation: DEFAULT_DEVIATION,
            magic: DEFAULT_MAGIC,
            comment: "xausignal".to_string(),
        }
    }
}

/// Broker acknowledgement of a submitted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub retcode: i64,
    pub price: f64,
    pub message: String,
}

/// Terminal connection used for ticks and order submission.
///
/// Calls are synchronous and expected to return within the terminal's own
/// timeout.
pub trait BrokerBridge: Send + Sync {
    fn is_available(&self) -> bool;

    fn initialize(&self) -> Result<(), BrokerError>;

    fn shutdown(&self);

    fn get_tick(&self, symbol: &str) -> Option<PriceTick>;

    fn send_market_order(&self, order: &OrderRequest) -> Result<OrderReceipt, BrokerError>;
}

/// Bridge for hosts without a broker terminal. Every call fails cleanly.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBroker;

impl BrokerBridge for UnavailableBroker {
    fn is_available(&self) -> bool {
        false
    }

    fn initialize(&self) -> Result<(), BrokerError> {
        warn!("Broker bridge: terminal not available, running without order routing");
        Err(BrokerError::Unavailable)
    }

    fn shutdown(&self) {}

    fn get_tick(&self, _symbol: &str) -> Option<PriceTick> {
        None
    }

    fn send_market_order(&self, order: &OrderRequest) -> Result<OrderReceipt, BrokerError> {
        if !order.side.is_directional() {
            return Err(BrokerError::Rejected {
                reason: "NEUTRAL is not an order side".to_string(),
            });
        }
        Err(BrokerError::Unavailable)
    }
}
