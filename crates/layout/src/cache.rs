//! Bounded memoization of block layouts.

use std::num::NonZeroUsize;

use lru::LruCache;
use numcube_core::Magnitude;
use tracing::debug;

use crate::{BlockLayout, LayoutPolicy};

/// Hit/miss counters for a [`LayoutCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that computed a fresh layout.
    pub misses: u64,
    /// Layouts currently resident.
    pub len: usize,
}

/// Layouts keyed by value with LRU eviction.
///
/// Layouts are pure functions of the value and the policy, so a cached entry
/// never goes stale.
pub struct LayoutCache {
    policy: LayoutPolicy,
    entries: LruCache<Magnitude, BlockLayout>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Create a cache holding at most `capacity` layouts (minimum 1).
    pub fn new(policy: LayoutPolicy, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            policy,
            entries: LruCache::new(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Policy the cached layouts were computed under.
    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    /// Layout for `value`, computing and storing it on a miss.
    pub fn layout(&mut self, value: Magnitude) -> BlockLayout {
        if let Some(layout) = self.entries.get(&value) {
            self.hits += 1;
            return *layout;
        }

        self.misses += 1;
        let layout = self.policy.plan(value);
        debug!(%value, count = %layout.unit.unit_count, "layout cache miss");
        self.entries.put(value, layout);
        layout
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.entries.len(),
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl std::fmt::Debug for LayoutCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutCache")
            .field("policy", &self.policy)
            .field("stats", &self.stats())
            .finish()
    }
}
