#![forbid(unsafe_code)]

use super::*;
use nd_core::ids::CollectionId;
use nd_core::model::CollectionStats;
use rusqlite::params;
use super::support::{collection_exists, now_ms};

impl SqliteStore {
    /// Aggregates over every task of the collection, subtasks included. The
    /// result is stamped with the computation time so cached copies carry
    /// their age.
    pub fn collection_stats(&self, id: CollectionId) -> Result<CollectionStats, StoreError> {
        if !collection_exists(&self.conn, id)? {
            return Err(StoreError::UnknownCollection);
        }

        let (task_count, completed_count) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks WHERE collection_id = ?1",
            params![id.as_i64()],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )?;

        CollectionStats::try_new(task_count, completed_count, now_ms())
            .map_err(|_| StoreError::InvalidInput("invalid stats aggregate"))
    }
}
