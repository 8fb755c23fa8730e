//! HTTP surface of the signal service

pub mod http;
pub mod requests;

pub use http::*;
pub use requests::{MarketBarInput, SignalRequest, VoteInput};
