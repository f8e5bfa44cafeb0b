#![forbid(unsafe_code)]

use super::super::StoreError;
use nd_core::ids::{CollectionId, TaskId};
use nd_core::model::{Collection, Task};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub(crate) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId::new(row.get(0)?),
        title: row.get(1)?,
        date_ms: row.get(2)?,
        completed: row.get::<_, i64>(3)? != 0,
        collection_id: CollectionId::new(row.get(4)?),
        parent_id: row.get::<_, Option<i64>>(5)?.map(TaskId::new),
        sort_order: row.get(6)?,
        created_at_ms: row.get(7)?,
        updated_at_ms: row.get(8)?,
    })
}

pub(crate) fn collection_from_row(row: &Row<'_>) -> rusqlite::Result<Collection> {
    Ok(Collection {
        id: CollectionId::new(row.get(0)?),
        name: row.get(1)?,
        favorite: row.get::<_, i64>(2)? != 0,
        created_at_ms: row.get(3)?,
        updated_at_ms: row.get(4)?,
    })
}

pub(crate) fn get_task(conn: &Connection, id: TaskId) -> Result<Option<Task>, StoreError> {
    Ok(conn
        .query_row(
            r#"
            SELECT id, title, date_ms, completed, collection_id, parent_id, sort_order,
                   created_at_ms, updated_at_ms
            FROM tasks
            WHERE id = ?1
            "#,
            params![id.as_i64()],
            task_from_row,
        )
        .optional()?)
}

pub(crate) fn collection_exists(conn: &Connection, id: CollectionId) -> Result<bool, StoreError> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM collections WHERE id = ?1",
            params![id.as_i64()],
            |_| Ok(()),
        )
        .optional()?
        .is_some())
}

/// Bumps the owning collection's `updated_at_ms`. Every task mutation runs
/// this inside its transaction so a collection row always reflects the time
/// of the last change within it.
pub(crate) fn touch_collection(
    conn: &Connection,
    id: CollectionId,
    now_ms: i64,
) -> Result<(), StoreError> {
    let updated = conn.execute(
        "UPDATE collections SET updated_at_ms = ?2 WHERE id = ?1",
        params![id.as_i64(), now_ms],
    )?;
    if updated == 0 {
        return Err(StoreError::UnknownCollection);
    }
    Ok(())
}
