//! Multi-timeframe memory: four retention tiers plus a reserved pattern tier.

pub mod importance;
pub mod store;

pub use importance::calculate_importance;
pub use store::{BoundedStore, Retained, RetentionPolicy};

use crate::models::memory::{MemoryEntry, MemoryPayload};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-key entry ceiling shared by every tier
pub const MAX_ENTRIES_PER_KEY: usize = 1000;

impl Retained for MemoryEntry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn importance(&self) -> f64 {
        self.importance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Immediate,
        Tier::ShortTerm,
        Tier::MediumTerm,
        Tier::LongTerm,
    ];

    pub fn retention(&self) -> TimeDelta {
        match self {
            Tier::Immediate => TimeDelta::days(1),
            Tier::ShortTerm => TimeDelta::days(7),
            Tier::MediumTerm => TimeDelta::days(30),
            Tier::LongTerm => TimeDelta::days(365),
        }
    }

    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(self.retention(), MAX_ENTRIES_PER_KEY)
    }
}

pub type TierLog = BTreeMap<String, Vec<MemoryEntry>>;

#[derive(Debug, Clone)]
pub struct MemoryStore {
    immediate: BoundedStore<MemoryEntry>,
    short_term: BoundedStore<MemoryEntry>,
    medium_term: BoundedStore<MemoryEntry>,
    long_term: BoundedStore<MemoryEntry>,
    /// Reserved for higher-level aggregates; never written by the engine
    patterns: BTreeMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::from_parts(
            TierLog::new(),
            TierLog::new(),
            TierLog::new(),
            TierLog::new(),
            BTreeMap::new(),
        )
    }

    /// Rebuild a store from captured tier contents, without eviction
    pub fn from_parts(
        immediate: TierLog,
        short_term: TierLog,
        medium_term: TierLog,
        long_term: TierLog,
        patterns: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            immediate: BoundedStore::with_entries(Tier::Immediate.policy(), immediate),
            short_term: BoundedStore::with_entries(Tier::ShortTerm.policy(), short_term),
            medium_term: BoundedStore::with_entries(Tier::MediumTerm.policy(), medium_term),
            long_term: BoundedStore::with_entries(Tier::LongTerm.policy(), long_term),
            patterns,
        }
    }

    /// Record a payload now. Returns the importance assigned to it.
    pub fn store(&mut self, key: &str, payload: MemoryPayload, tier: Tier) -> f64 {
        self.store_at(key, payload, tier, Utc::now())
    }

    pub fn store_at(
        &mut self,
        key: &str,
        payload: MemoryPayload,
        tier: Tier,
        now: DateTime<Utc>,
    ) -> f64 {
        let importance = calculate_importance(&payload);
        let entry = MemoryEntry::new(now, payload, importance);
        let evicted = self.tier_mut(tier).push(key, entry, now);

        debug!(
            key = %key,
            tier = ?tier,
            importance = importance,
            evicted = evicted,
            "MemoryStore: stored entry for {} in {:?} (importance {:.2}, evicted {})",
            key,
            tier,
            importance,
            evicted
        );

        importance
    }

    pub fn tier(&self, tier: Tier) -> &BoundedStore<MemoryEntry> {
        match tier {
            Tier::Immediate => &self.immediate,
            Tier::ShortTerm => &self.short_term,
            Tier::MediumTerm => &self.medium_term,
            Tier::LongTerm => &self.long_term,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut BoundedStore<MemoryEntry> {
        match tier {
            Tier::Immediate => &mut self.immediate,
            Tier::ShortTerm => &mut self.short_term,
            Tier::MediumTerm => &mut self.medium_term,
            Tier::LongTerm => &mut self.long_term,
        }
    }

    pub fn entries(&self, key: &str, tier: Tier) -> &[MemoryEntry] {
        self.tier(tier).get(key)
    }

    pub fn patterns(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.patterns
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
