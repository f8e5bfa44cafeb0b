#![forbid(unsafe_code)]

//! Service layer over `nd_storage`: the task-consistency operations, the
//! per-collection stats cache, and the fire-and-forget change broadcast. An
//! HTTP transport would call into [`TaskService`]; nothing here knows about
//! requests or sockets.

mod collections;
mod notify;
mod stats;
mod support;
mod tasks;

pub use notify::{ChangeEvent, ChangeHub, ChangeListener, StatsPayload, TaskPayload};
pub use stats::StatsCache;

use nd_storage::{SqliteStore, StoreError};
use std::path::Path;

pub struct TaskService {
    store: SqliteStore,
    stats: StatsCache,
    hub: ChangeHub,
}

impl TaskService {
    /// Opens the store and builds the process-wide cache and hub. One
    /// instance per process; the cache lives until explicit invalidation,
    /// never by expiry.
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = SqliteStore::open(storage_dir)?;
        Ok(Self {
            store,
            stats: StatsCache::new(),
            hub: ChangeHub::new(),
        })
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.hub.subscribe(listener);
    }
}
