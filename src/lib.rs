//! XAU/USD trading-signal engine and its HTTP service

pub mod common;
pub mod config;
pub mod core;
pub mod errors;
pub mod indicators;
pub mod integrations;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod smoke;
pub mod training;
pub mod ui;
