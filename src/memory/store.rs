//! Age- and importance-bounded keyed log

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;

/// An entry that can be aged out and ranked under capacity pressure
pub trait Retained {
    fn timestamp(&self) -> DateTime<Utc>;
    fn importance(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub max_age: TimeDelta,
    /// Per-key entry ceiling
    pub capacity: usize,
}

impl RetentionPolicy {
    pub fn new(max_age: TimeDelta, capacity: usize) -> Self {
        Self { max_age, capacity }
    }
}

/// Keyed sequences of entries. Every write to a key purges that key's
/// expired entries, then drops the lowest-importance excess over capacity.
#[derive(Debug, Clone)]
pub struct BoundedStore<E> {
    policy: RetentionPolicy,
    entries: BTreeMap<String, Vec<E>>,
}

impl<E: Retained> BoundedStore<E> {
    pub fn new(policy: RetentionPolicy) -> Self {
        Self::with_entries(policy, BTreeMap::new())
    }

    /// Restore previously captured entries without running eviction
    pub fn with_entries(policy: RetentionPolicy, entries: BTreeMap<String, Vec<E>>) -> Self {
        Self { policy, entries }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Append an entry, then evict for that key. Returns the number of
    /// entries removed.
    pub fn push(&mut self, key: &str, entry: E, now: DateTime<Utc>) -> usize {
        self.entries.entry(key.to_string()).or_default().push(entry);
        self.evict(key, now)
    }

    /// Purge entries older than the retention window, then cap by importance.
    ///
    /// When capping, the retained entries are left ordered by importance
    /// descending; ties keep their insertion order.
    pub fn evict(&mut self, key: &str, now: DateTime<Utc>) -> usize {
        let Some(entries) = self.entries.get_mut(key) else {
            return 0;
        };
        let before = entries.len();
        let max_age = self.policy.max_age;

        entries.retain(|e| now - e.timestamp() <= max_age);

        if entries.len() > self.policy.capacity {
            entries.sort_by(|a, b| b.importance().total_cmp(&a.importance()));
            entries.truncate(self.policy.capacity);
        }

        before - entries.len()
    }

    pub fn get(&self, key: &str) -> &[E] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, key: &str) -> usize {
        self.get(key).len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<E>> {
        &self.entries
    }
}
