#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::CollectionId;
use nd_core::model::{Task, TaskTree};
use rusqlite::params;
use std::collections::HashMap;
use super::super::support::{collection_exists, task_from_row};

impl SqliteStore {
    /// Top-level tasks of a collection with their direct subtasks attached.
    /// Both levels are ordered by `sort_order` ascending with unordered rows
    /// appended after, creation time as the tie-break.
    pub fn list_tasks_by_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<TaskTree>, StoreError> {
        if !collection_exists(&self.conn, collection_id)? {
            return Err(StoreError::UnknownCollection);
        }

        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, title, date_ms, completed, collection_id, parent_id, sort_order,
                   created_at_ms, updated_at_ms
            FROM tasks
            WHERE collection_id = ?1 AND parent_id IS NULL
            ORDER BY sort_order IS NULL, sort_order ASC, created_at_ms ASC, id ASC
            "#,
        )?;
        let top_level = stmt
            .query_map(params![collection_id.as_i64()], task_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, title, date_ms, completed, collection_id, parent_id, sort_order,
                   created_at_ms, updated_at_ms
            FROM tasks
            WHERE collection_id = ?1 AND parent_id IS NOT NULL
            ORDER BY sort_order IS NULL, sort_order ASC, created_at_ms ASC, id ASC
            "#,
        )?;
        let subtasks = stmt
            .query_map(params![collection_id.as_i64()], task_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut by_parent: HashMap<i64, Vec<Task>> = HashMap::new();
        for subtask in subtasks {
            if let Some(parent_id) = subtask.parent_id {
                by_parent.entry(parent_id.as_i64()).or_default().push(subtask);
            }
        }

        Ok(top_level
            .into_iter()
            .map(|task| {
                let subtasks = by_parent.remove(&task.id.as_i64()).unwrap_or_default();
                TaskTree { task, subtasks }
            })
            .collect())
    }
}
