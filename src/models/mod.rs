//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod instrument;
pub mod memory;
pub mod price;
pub mod signal;
pub mod state;
pub mod trade;

pub use indicators::{
    BollingerBandsIndicator, EmaIndicator, IndicatorSet, MacdIndicator, RsiIndicator,
    SmaIndicator, StochasticIndicator,
};
pub use instrument::{Asset, Instrument};
pub use memory::{MemoryEntry, MemoryPayload};
pub use price::PricePoint;
pub use signal::{Signal, SignalAction, SignalFactor, VoteDirection, VoteSource};
pub use state::{PerformanceStats, RiskState};
pub use trade::{SwapRequest, TradeOutcome};
