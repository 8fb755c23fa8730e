//! External systems: broker terminal and alert feed.

pub mod broker;
pub mod tradingview;

pub use broker::{BrokerBridge, OrderReceipt, OrderRequest, UnavailableBroker};
pub use tradingview::{build_analysis_from_payload, TradingViewAnalysis, TradingViewFeed};
