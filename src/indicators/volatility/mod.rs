//! Volatility indicators: Bollinger Bands, realized volatility

pub mod bollinger;
pub mod realized;

pub use bollinger::*;
pub use realized::*;
