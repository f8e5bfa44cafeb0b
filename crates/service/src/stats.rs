#![forbid(unsafe_code)]

use crate::TaskService;
use nd_core::ids::CollectionId;
use nd_core::model::CollectionStats;
use nd_storage::StoreError;
use std::collections::HashMap;

/// In-process memo of the last computed stats per collection. No TTL:
/// entries leave only through [`StatsCache::invalidate`], which every
/// mutating task operation issues for the affected collection.
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: HashMap<CollectionId, CollectionStats>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CollectionId) -> Option<&CollectionStats> {
        self.entries.get(&id)
    }

    pub fn put(&mut self, id: CollectionId, stats: CollectionStats) {
        self.entries.insert(id, stats);
    }

    /// Safe on a cold cache; invalidating an absent entry is a no-op.
    pub fn invalidate(&mut self, id: CollectionId) {
        self.entries.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TaskService {
    /// Serves the cached entry when present; a miss recomputes from the
    /// store and repopulates. Correctness never depends on the cache; it
    /// exists because the frontend polls stats every few seconds.
    pub fn get_stats(&mut self, id: CollectionId) -> Result<CollectionStats, StoreError> {
        if let Some(cached) = self.stats.get(id) {
            return Ok(cached.clone());
        }
        let stats = self.store.collection_stats(id)?;
        self.stats.put(id, stats.clone());
        Ok(stats)
    }

    pub fn invalidate_stats(&mut self, id: CollectionId) {
        self.stats.invalidate(id);
    }
}
