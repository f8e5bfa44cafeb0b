#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::TaskId;
use nd_core::model::Task;
use rusqlite::params;
use super::super::support::{get_task, normalize_title, now_ms, touch_collection};

impl SqliteStore {
    /// Partial update: only the provided fields change. Re-parenting goes
    /// through the same one-level check as task creation.
    pub fn update_task(
        &mut self,
        id: TaskId,
        request: TaskUpdateRequest,
    ) -> Result<Task, StoreError> {
        if request.is_empty() {
            return Err(StoreError::InvalidInput("no fields to update"));
        }

        let TaskUpdateRequest {
            title,
            date_ms,
            completed,
            parent_id,
            sort_order,
        } = request;

        let title = title.as_deref().map(normalize_title).transpose()?;
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let Some(current) = get_task(&tx, id)? else {
            return Err(StoreError::UnknownTask);
        };

        if let Some(Some(new_parent)) = parent_id {
            if new_parent == id {
                return Err(StoreError::InvalidInput("task cannot be its own parent"));
            }
            let Some(parent) = get_task(&tx, new_parent)? else {
                return Err(StoreError::UnknownTask);
            };
            if parent.is_subtask() {
                return Err(StoreError::InvalidInput("parent is already a subtask"));
            }
            if parent.collection_id != current.collection_id {
                return Err(StoreError::InvalidInput(
                    "parent belongs to a different collection",
                ));
            }
            // Demoting a task that has subtasks of its own would nest two
            // levels deep.
            let children: i64 = tx.query_row(
                "SELECT COUNT(*) FROM tasks WHERE parent_id = ?1",
                params![id.as_i64()],
                |row| row.get(0),
            )?;
            if children > 0 {
                return Err(StoreError::InvalidInput(
                    "task with subtasks cannot become a subtask",
                ));
            }
        }

        let task = Task {
            id,
            title: title.unwrap_or(current.title),
            date_ms: date_ms.unwrap_or(current.date_ms),
            completed: completed.unwrap_or(current.completed),
            collection_id: current.collection_id,
            parent_id: parent_id.unwrap_or(current.parent_id),
            sort_order: sort_order.or(current.sort_order),
            created_at_ms: current.created_at_ms,
            updated_at_ms: now_ms,
        };

        tx.execute(
            r#"
            UPDATE tasks
            SET title = ?2, date_ms = ?3, completed = ?4, parent_id = ?5, sort_order = ?6,
                updated_at_ms = ?7
            WHERE id = ?1
            "#,
            params![
                id.as_i64(),
                task.title,
                task.date_ms,
                if task.completed { 1i64 } else { 0i64 },
                task.parent_id.map(TaskId::as_i64),
                task.sort_order,
                now_ms
            ],
        )?;

        touch_collection(&tx, task.collection_id, now_ms)?;
        tx.commit()?;
        Ok(task)
    }
}
