//! Engine state persistence

pub mod snapshot;

pub use snapshot::{EngineSnapshot, LearningParams, MemorySnapshot, SnapshotError, SnapshotStore};
