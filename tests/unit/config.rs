//! Unit tests for engine configuration

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tradeloom::config::{default_instruments, ConfigError, EngineConfig};

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.min_profit_threshold, 0.015);
    assert_eq!(config.max_slippage, 0.005);
    assert_eq!(config.max_trade_amount, 0.1);
    assert_eq!(config.confidence_threshold, 0.65);
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.lookback_days, 90);
    assert_eq!(config.cycle_interval, Duration::from_secs(300));
    assert_eq!(config.instrument_delay, Duration::from_secs(10));
    assert_eq!(config.cycle_cooldown, Duration::from_secs(60));
    assert_eq!(config.instruments.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_instruments() {
    let instruments = default_instruments();
    assert_eq!(instruments[0].pair, "ETH/USDC");
    assert_eq!(instruments[0].price_key, "ethereum");
    assert_eq!(instruments[1].pair, "UNI/ETH");
    assert_eq!(instruments[1].price_key, "uniswap");
    assert_eq!(instruments[1].token1.symbol, "WETH");
}

#[test]
fn test_validate_rejects_out_of_range() {
    let bad = EngineConfig {
        min_profit_threshold: 0.0,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::MinProfitThreshold(_))));

    let bad = EngineConfig {
        max_slippage: 0.2,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::MaxSlippage(_))));

    let bad = EngineConfig {
        min_profit_threshold: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::MinProfitThreshold(_))));

    let bad = EngineConfig {
        max_slippage: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::MaxSlippage(_))));

    let bad = EngineConfig {
        max_trade_amount: 0.001,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::MaxTradeAmount { .. })));

    let bad = EngineConfig {
        max_trade_amount: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(bad.validate().is_err());

    let bad = EngineConfig {
        learning_rate: 0.5,
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::LearningRate(_))));

    let bad = EngineConfig {
        instruments: Vec::new(),
        ..EngineConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::NoInstruments)));
}

// The only test that touches the process environment
#[test]
fn test_from_env_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{
            "pair": "WBTC/USDC",
            "priceKey": "wrapped-bitcoin",
            "token0": {{"symbol": "WBTC", "address": "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", "decimals": 8}},
            "token1": {{"symbol": "USDC", "address": "0xA0b86a33E6441E6B4C6b39A9D71f6BFF8FaD9F3C", "decimals": 6}}
        }}]"#
    )
    .unwrap();

    std::env::set_var("MIN_PROFIT_THRESHOLD", "0.02");
    std::env::set_var("CYCLE_INTERVAL", "1500");
    std::env::set_var("LOOKBACK_DAYS", "not-a-number");
    std::env::set_var("INSTRUMENTS_FILE", file.path());

    let config = EngineConfig::from_env().unwrap();

    std::env::remove_var("MIN_PROFIT_THRESHOLD");
    std::env::remove_var("CYCLE_INTERVAL");
    std::env::remove_var("LOOKBACK_DAYS");
    std::env::set_var("INSTRUMENTS_FILE", "/nonexistent/instruments.json");
    let missing = EngineConfig::from_env();
    std::env::remove_var("INSTRUMENTS_FILE");

    assert_eq!(config.min_profit_threshold, 0.02);
    assert_eq!(config.cycle_interval, Duration::from_millis(1500));
    assert_eq!(config.lookback_days, 90);
    assert_eq!(config.instruments.len(), 1);
    assert_eq!(config.instruments[0].fee_rate, 3000);
    assert_eq!(config.instruments[0].token0.decimals, 8);
    assert!(matches!(missing, Err(ConfigError::InstrumentsFile { .. })));
}
