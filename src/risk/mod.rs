//! Position sizing, outcome-driven adaptation and performance tracking

pub mod adaptation;
pub mod performance;
pub mod sizing;

pub use adaptation::adapt;
pub use performance::PerformanceReport;
pub use sizing::{kelly_fraction, PositionSizer};
