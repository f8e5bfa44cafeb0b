#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::TaskId;
use nd_core::model::Task;
use rusqlite::params;
use super::super::support::{get_task, now_ms, touch_collection};

impl SqliteStore {
    /// Flips `completed` on this row only. Cascading to subtasks is
    /// `complete_with_subtasks`, never this.
    pub fn toggle_task_completion(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let Some(mut task) = get_task(&tx, id)? else {
            return Err(StoreError::UnknownTask);
        };

        task.completed = !task.completed;
        task.updated_at_ms = now_ms;
        tx.execute(
            "UPDATE tasks SET completed = ?2, updated_at_ms = ?3 WHERE id = ?1",
            params![
                id.as_i64(),
                if task.completed { 1i64 } else { 0i64 },
                now_ms
            ],
        )?;

        touch_collection(&tx, task.collection_id, now_ms)?;
        tx.commit()?;
        Ok(task)
    }

    /// Forces `completed = complete` on the task and every direct subtask in
    /// one transaction. The caller supplies the target value, so children end
    /// up in the parent's state regardless of what they were before, and the
    /// call is idempotent.
    pub fn complete_with_subtasks(
        &mut self,
        id: TaskId,
        complete: bool,
    ) -> Result<Task, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let Some(mut task) = get_task(&tx, id)? else {
            return Err(StoreError::UnknownTask);
        };

        tx.execute(
            "UPDATE tasks SET completed = ?2, updated_at_ms = ?3 WHERE id = ?1 OR parent_id = ?1",
            params![id.as_i64(), if complete { 1i64 } else { 0i64 }, now_ms],
        )?;

        touch_collection(&tx, task.collection_id, now_ms)?;
        tx.commit()?;

        task.completed = complete;
        task.updated_at_ms = now_ms;
        Ok(task)
    }
}
