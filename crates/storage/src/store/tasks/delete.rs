#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::TaskId;
use rusqlite::params;
use super::super::support::{get_task, now_ms, touch_collection};

impl SqliteStore {
    /// Deletes the task together with its direct subtasks and touches the
    /// owning collection, all in one transaction. A failure at any step
    /// leaves every row in place.
    pub fn delete_task_cascade(&mut self, id: TaskId) -> Result<CascadeDelete, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let Some(task) = get_task(&tx, id)? else {
            return Err(StoreError::UnknownTask);
        };

        // Subtasks first, so the self-referential foreign key never dangles.
        let subtasks = tx.execute("DELETE FROM tasks WHERE parent_id = ?1", params![id.as_i64()])?;
        tx.execute("DELETE FROM tasks WHERE id = ?1", params![id.as_i64()])?;

        touch_collection(&tx, task.collection_id, now_ms)?;
        tx.commit()?;

        Ok(CascadeDelete {
            collection_id: task.collection_id,
            deleted: subtasks + 1,
        })
    }
}
