//! Unit tests for configuration defaults

use std::path::PathBuf;

use xausignal::config::{ServiceConfig, Settings};
use xausignal::logging::is_production;
use xausignal::signals::risk::RiskTiers;

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.instrument, "XAUUSD");
    assert_eq!(settings.lookback_bars, 128);
    assert_eq!(settings.buy_threshold, 0.62);
    assert_eq!(settings.sell_threshold, 0.62);
    assert_eq!(RiskTiers::from(&settings), RiskTiers::default());
}

#[test]
fn test_service_paths_live_under_data_dir() {
    let config = ServiceConfig {
        data_dir: PathBuf::from("/tmp/xau"),
        ..ServiceConfig::default()
    };
    assert_eq!(config.port, 8000);
    assert_eq!(config.realtime_path(), PathBuf::from("/tmp/xau/realtime_xauusd.ndjson"));
    assert!(config.experience_path().starts_with("/tmp/xau"));
    assert!(config.tradingview_path().starts_with("/tmp/xau"));
}

#[test]
fn test_production_environment_names() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
}
