#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::{CollectionId, TaskId};
use nd_core::order::plan_reorder;
use rusqlite::params;
use super::super::support::{get_task, now_ms, touch_collection};

impl SqliteStore {
    /// Assigns `sort_order = index` across one sibling group, writing only
    /// the rows whose order actually changes. All writes commit together or
    /// not at all. Returns the owning collection.
    pub fn reorder_siblings(&mut self, ids: &[TaskId]) -> Result<CollectionId, StoreError> {
        if ids.is_empty() {
            return Err(StoreError::InvalidInput("no tasks to reorder"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let mut current = Vec::with_capacity(ids.len());
        let mut group: Option<(CollectionId, Option<TaskId>)> = None;
        for id in ids {
            let Some(task) = get_task(&tx, *id)? else {
                return Err(StoreError::UnknownTask);
            };
            match group {
                None => group = Some((task.collection_id, task.parent_id)),
                Some(expected) => {
                    if expected != (task.collection_id, task.parent_id) {
                        return Err(StoreError::InvalidInput("tasks are not siblings"));
                    }
                }
            }
            current.push((task.id, task.sort_order));
        }
        let Some((collection_id, _)) = group else {
            return Err(StoreError::InvalidInput("no tasks to reorder"));
        };

        let writes = plan_reorder(ids, &current);
        for write in &writes {
            tx.execute(
                "UPDATE tasks SET sort_order = ?2, updated_at_ms = ?3 WHERE id = ?1",
                params![write.task.as_i64(), write.sort_order, now_ms],
            )?;
        }

        if !writes.is_empty() {
            touch_collection(&tx, collection_id, now_ms)?;
        }
        tx.commit()?;
        Ok(collection_id)
    }
}
