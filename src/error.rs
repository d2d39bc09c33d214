//! Engine error taxonomy
//!
//! None of these are fatal to the analysis loop; configuration errors live in
//! [`crate::config::ConfigError`].

use crate::db::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient data for {instrument}: {available} < {required} points")]
    InsufficientData {
        instrument: String,
        available: usize,
        required: usize,
    },

    #[error("trade execution failed: {0}")]
    Execution(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] SnapshotError),

    #[error("analysis cycle failed: {0}")]
    Cycle(String),
}

impl EngineError {
    /// Recoverable condition that just skips one instrument for one cycle.
    /// Provider failures surface here too, as an empty series.
    pub fn is_skip(&self) -> bool {
        matches!(self, EngineError::InsufficientData { .. })
    }
}
