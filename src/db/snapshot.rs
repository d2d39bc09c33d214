//! JSON engine snapshot: memory tiers, performance and learning parameters

use crate::core::context::EngineContext;
use crate::memory::{MemoryStore, Tier, TierLog};
use crate::models::state::{PerformanceStats, RiskState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub memory: MemorySnapshot,
    #[serde(default)]
    pub learning_params: LearningParams,
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub last_saved: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemorySnapshot {
    #[serde(with = "key_pairs")]
    pub immediate: TierLog,
    #[serde(with = "key_pairs")]
    pub short_term: TierLog,
    #[serde(with = "key_pairs")]
    pub medium_term: TierLog,
    #[serde(with = "key_pairs")]
    pub long_term: TierLog,
    #[serde(with = "key_pairs")]
    pub patterns: BTreeMap<String, serde_json::Value>,
    pub performance: PerformanceStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningParams {
    pub learning_rate: f64,
    pub confidence: f64,
    pub adaptation_speed: f64,
    pub market_regime: String,
}

impl Default for LearningParams {
    fn default() -> Self {
        let risk = RiskState::default();
        Self {
            learning_rate: risk.learning_rate,
            confidence: risk.confidence,
            adaptation_speed: EngineContext::DEFAULT_ADAPTATION_SPEED,
            market_regime: EngineContext::DEFAULT_MARKET_REGIME.to_string(),
        }
    }
}

impl EngineSnapshot {
    /// Capture a consistent copy of the engine state
    pub fn capture(ctx: &EngineContext, now: DateTime<Utc>) -> Self {
        let memory = &ctx.memory;
        Self {
            memory: MemorySnapshot {
                immediate: memory.tier(Tier::Immediate).entries().clone(),
                short_term: memory.tier(Tier::ShortTerm).entries().clone(),
                medium_term: memory.tier(Tier::MediumTerm).entries().clone(),
                long_term: memory.tier(Tier::LongTerm).entries().clone(),
                patterns: memory.patterns().clone(),
                performance: ctx.performance.clone(),
            },
            learning_params: LearningParams {
                learning_rate: ctx.risk.learning_rate,
                confidence: ctx.risk.confidence,
                adaptation_speed: ctx.adaptation_speed,
                market_regime: ctx.market_regime.clone(),
            },
            last_saved: now,
        }
    }

    /// Rebuild an engine context from this snapshot. Zero, non-finite or
    /// empty learning parameters fall back to their fresh-engine defaults.
    pub fn restore(self) -> EngineContext {
        let defaults = LearningParams::default();
        let params = self.learning_params;
        let MemorySnapshot {
            immediate,
            short_term,
            medium_term,
            long_term,
            patterns,
            performance,
        } = self.memory;

        EngineContext {
            risk: RiskState::new(
                set_or(params.confidence, defaults.confidence),
                set_or(params.learning_rate, defaults.learning_rate),
            ),
            performance,
            memory: MemoryStore::from_parts(immediate, short_term, medium_term, long_term, patterns),
            adaptation_speed: set_or(params.adaptation_speed, defaults.adaptation_speed),
            market_regime: if params.market_regime.is_empty() {
                defaults.market_regime
            } else {
                params.market_regime
            },
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn set_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        default
    }
}

/// Keyed maps persisted as `[[key, value], ...]` pair sequences. Plain JSON
/// objects are accepted on load as well.
mod key_pairs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Layout<V> {
        Pairs(Vec<(String, V)>),
        Object(BTreeMap<String, V>),
    }

    pub fn serialize<S, V>(map: &BTreeMap<String, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        Ok(match Layout::deserialize(deserializer)? {
            Layout::Pairs(pairs) => pairs.into_iter().collect(),
            Layout::Object(map) => map,
        })
    }
}

/// File-backed snapshot persistence
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the snapshot through a temporary file so a crash never leaves a
    /// truncated document behind
    pub async fn save(&self, snapshot: &EngineSnapshot) -> Result<(), SnapshotError> {
        let bytes = snapshot.to_json()?;
        let tmp = self.path.with_extension("tmp");

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| io_error(&tmp, source))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| io_error(&self.path, source))?;

        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "SnapshotStore: saved {} bytes to {}",
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    pub async fn load(&self) -> Result<EngineSnapshot, SnapshotError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| io_error(&self.path, source))?;
        EngineSnapshot::from_json(&bytes)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    }
}
