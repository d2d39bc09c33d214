//! External collaborators: price history and trade execution

pub mod coingecko;
pub mod execution;
pub mod market_data;

pub use coingecko::CoinGeckoProvider;
pub use execution::{DryRunExecutor, TradeExecutor};
pub use market_data::{MarketDataProvider, ProviderError, StaticMarketDataProvider};
