#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::TaskId;
use nd_core::model::Task;
use rusqlite::params;
use super::super::support::{collection_exists, get_task, normalize_title, now_ms, touch_collection};

impl SqliteStore {
    pub fn create_task(&mut self, request: TaskCreateRequest) -> Result<Task, StoreError> {
        let TaskCreateRequest {
            title,
            collection_id,
            date_ms,
            parent_id,
        } = request;

        let title = normalize_title(&title)?;
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        if !collection_exists(&tx, collection_id)? {
            return Err(StoreError::UnknownCollection);
        }

        if let Some(parent_id) = parent_id {
            let Some(parent) = get_task(&tx, parent_id)? else {
                return Err(StoreError::UnknownTask);
            };
            // Nesting is one level deep: a subtask cannot parent another task.
            if parent.is_subtask() {
                return Err(StoreError::InvalidInput("parent is already a subtask"));
            }
            // Subtasks live in their parent's collection, otherwise the
            // listing filter would never surface them.
            if parent.collection_id != collection_id {
                return Err(StoreError::InvalidInput(
                    "parent belongs to a different collection",
                ));
            }
        }

        tx.execute(
            r#"
            INSERT INTO tasks(title, date_ms, completed, collection_id, parent_id, sort_order,
                              created_at_ms, updated_at_ms)
            VALUES (?1, ?2, 0, ?3, ?4, NULL, ?5, ?5)
            "#,
            params![
                title,
                date_ms,
                collection_id.as_i64(),
                parent_id.map(TaskId::as_i64),
                now_ms
            ],
        )?;
        let id = TaskId::new(tx.last_insert_rowid());

        touch_collection(&tx, collection_id, now_ms)?;
        tx.commit()?;

        Ok(Task {
            id,
            title,
            date_ms,
            completed: false,
            collection_id,
            parent_id,
            sort_order: None,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }
}
