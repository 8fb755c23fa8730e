//! Market data collaborators of the signal service.

pub mod market_data;
pub mod realtime;

pub use market_data::{
    BrokerPriceProvider, BufferPriceProvider, CompositePriceProvider, FixedPriceProvider,
    PriceProvider,
};
pub use realtime::{mock_bar_stream, RealTimeBuffer, RealTimeCollector};
