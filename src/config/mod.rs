//! Engine configuration read from the process environment

use crate::models::instrument::{Asset, Instrument};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MIN_PROFIT_THRESHOLD should be between 0 and 0.5, got {0}")]
    MinProfitThreshold(f64),

    #[error("MAX_SLIPPAGE should be between 0 and 0.1, got {0}")]
    MaxSlippage(f64),

    #[error("MAX_TRADE_AMOUNT should be at least {min}, got {value}")]
    MaxTradeAmount { value: f64, min: f64 },

    #[error("CONFIDENCE_THRESHOLD should be between 0 and 1, got {0}")]
    ConfidenceThreshold(f64),

    #[error("LEARNING_RATE should be between 0.001 and 0.1, got {0}")]
    LearningRate(f64),

    #[error("LOOKBACK_DAYS must be greater than 0")]
    LookbackDays,

    #[error("no instruments configured")]
    NoInstruments,

    #[error("failed to read instruments file {path}: {source}")]
    InstrumentsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid instruments file {path}: {source}")]
    InstrumentsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Values consumed by the signal, sizing and orchestration layers
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub min_profit_threshold: f64,
    pub max_slippage: f64,
    pub max_trade_amount: f64,
    /// Gate a signal's confidence must exceed before a trade is attempted
    pub confidence_threshold: f64,
    /// Initial learning rate for a fresh risk state
    pub learning_rate: f64,
    pub lookback_days: u32,
    pub cycle_interval: Duration,
    /// Pacing delay between instruments, protects the provider rate limit
    pub instrument_delay: Duration,
    /// Pause after a failed cycle
    pub cycle_cooldown: Duration,
    pub state_path: PathBuf,
    pub provider_url: String,
    pub http_port: u16,
    pub instruments: Vec<Instrument>,
}

impl EngineConfig {
    pub const DEFAULT_MIN_PROFIT_THRESHOLD: f64 = 0.015;
    pub const DEFAULT_MAX_SLIPPAGE: f64 = 0.005;
    pub const DEFAULT_MAX_TRADE_AMOUNT: f64 = 0.1;
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.65;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
    pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;
    pub const MIN_TRADE_AMOUNT: f64 = 0.01;

    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let instruments = match env::var("INSTRUMENTS_FILE") {
            Ok(path) => load_instruments(PathBuf::from(path))?,
            Err(_) => defaults.instruments,
        };

        Ok(Self {
            min_profit_threshold: env_or("MIN_PROFIT_THRESHOLD", defaults.min_profit_threshold),
            max_slippage: env_or("MAX_SLIPPAGE", defaults.max_slippage),
            max_trade_amount: env_or("MAX_TRADE_AMOUNT", defaults.max_trade_amount),
            confidence_threshold: env_or("CONFIDENCE_THRESHOLD", defaults.confidence_threshold),
            learning_rate: env_or("LEARNING_RATE", defaults.learning_rate),
            lookback_days: env_or("LOOKBACK_DAYS", defaults.lookback_days),
            cycle_interval: env_millis("CYCLE_INTERVAL", defaults.cycle_interval),
            instrument_delay: env_millis("INSTRUMENT_DELAY", defaults.instrument_delay),
            cycle_cooldown: env_millis("CYCLE_COOLDOWN", defaults.cycle_cooldown),
            state_path: env::var("STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            provider_url: env::var("COINGECKO_API_URL").unwrap_or(defaults.provider_url),
            http_port: env_or("PORT", defaults.http_port),
            instruments,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_profit_threshold > 0.0 && self.min_profit_threshold <= 0.5) {
            return Err(ConfigError::MinProfitThreshold(self.min_profit_threshold));
        }
        if !(self.max_slippage > 0.0 && self.max_slippage <= 0.1) {
            return Err(ConfigError::MaxSlippage(self.max_slippage));
        }
        if !(self.max_trade_amount >= Self::MIN_TRADE_AMOUNT) {
            return Err(ConfigError::MaxTradeAmount {
                value: self.max_trade_amount,
                min: Self::MIN_TRADE_AMOUNT,
            });
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::ConfidenceThreshold(self.confidence_threshold));
        }
        if !(0.001..=0.1).contains(&self.learning_rate) {
            return Err(ConfigError::LearningRate(self.learning_rate));
        }
        if self.lookback_days == 0 {
            return Err(ConfigError::LookbackDays);
        }
        if self.instruments.is_empty() {
            return Err(ConfigError::NoInstruments);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_profit_threshold: Self::DEFAULT_MIN_PROFIT_THRESHOLD,
            max_slippage: Self::DEFAULT_MAX_SLIPPAGE,
            max_trade_amount: Self::DEFAULT_MAX_TRADE_AMOUNT,
            confidence_threshold: Self::DEFAULT_CONFIDENCE_THRESHOLD,
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            lookback_days: Self::DEFAULT_LOOKBACK_DAYS,
            cycle_interval: Duration::from_millis(300_000),
            instrument_delay: Duration::from_millis(10_000),
            cycle_cooldown: Duration::from_millis(60_000),
            state_path: PathBuf::from("bot_data.json"),
            provider_url: "https://api.coingecko.com/api/v3".to_string(),
            http_port: 8080,
            instruments: default_instruments(),
        }
    }
}

/// ETH/USDC and UNI/ETH on mainnet
pub fn default_instruments() -> Vec<Instrument> {
    let weth = Asset::new("WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18);
    let usdc = Asset::new("USDC", "0xA0b86a33E6441E6B4C6b39A9D71f6BFF8FaD9F3C", 6);
    let uni = Asset::new("UNI", "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984", 18);

    vec![
        Instrument {
            pair: "ETH/USDC".to_string(),
            price_key: "ethereum".to_string(),
            token0: weth.clone(),
            token1: usdc,
            fee_rate: 3000,
        },
        Instrument {
            pair: "UNI/ETH".to_string(),
            price_key: "uniswap".to_string(),
            token0: uni,
            token1: weth,
            fee_rate: 3000,
        },
    ]
}

/// Deployment environment, used to pick the log format
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

fn load_instruments(path: PathBuf) -> Result<Vec<Instrument>, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::InstrumentsFile {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::InstrumentsFormat { path, source })
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: Duration) -> Duration {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
