//! Signal fusion: per-indicator votes, aggregation and the final decision.

pub mod aggregation;
pub mod categories;
pub mod engine;
pub mod scoring;
pub mod signal_generator;

pub use aggregation::*;
pub use categories::*;
pub use engine::{Evaluation, SignalEngine, MIN_PRICE_POINTS};
pub use scoring::*;
pub use signal_generator::*;
