#![forbid(unsafe_code)]

use super::*;
use nd_core::ids::CollectionId;
use nd_core::model::{Collection, CollectionSummary};
use rusqlite::{OptionalExtension, params};
use super::support::{collection_from_row, normalize_collection_name, now_ms};

const SEED_COLLECTIONS: &[(&str, bool)] = &[
    ("school", true),
    ("personal", false),
    ("design", false),
    ("groceries", false),
];

impl SqliteStore {
    pub fn create_collection(
        &mut self,
        request: CollectionCreateRequest,
    ) -> Result<Collection, StoreError> {
        let name = normalize_collection_name(&request.name)?;
        let now_ms = now_ms();

        self.conn.execute(
            "INSERT INTO collections(name, is_favorite, created_at_ms, updated_at_ms) \
             VALUES (?1, 0, ?2, ?2)",
            params![name, now_ms],
        )?;
        let id = CollectionId::new(self.conn.last_insert_rowid());

        Ok(Collection {
            id,
            name,
            favorite: false,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }

    /// Lists every collection with its task counters in one aggregate query.
    /// Subtasks count toward both counters like any other task.
    pub fn list_collections(&self) -> Result<Vec<CollectionSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT c.id, c.name, c.is_favorite, c.created_at_ms, c.updated_at_ms,
                   COUNT(t.id), COALESCE(SUM(t.completed), 0)
            FROM collections c
            LEFT JOIN tasks t ON t.collection_id = c.id
            GROUP BY c.id
            ORDER BY c.id ASC
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CollectionSummary {
                collection: collection_from_row(row)?,
                task_count: row.get(5)?,
                completed_count: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn toggle_collection_favorite(
        &mut self,
        id: CollectionId,
    ) -> Result<Collection, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let row = tx
            .query_row(
                "SELECT id, name, is_favorite, created_at_ms, updated_at_ms \
                 FROM collections WHERE id = ?1",
                params![id.as_i64()],
                collection_from_row,
            )
            .optional()?;
        let Some(mut collection) = row else {
            return Err(StoreError::UnknownCollection);
        };

        collection.favorite = !collection.favorite;
        collection.updated_at_ms = now_ms;
        tx.execute(
            "UPDATE collections SET is_favorite = ?2, updated_at_ms = ?3 WHERE id = ?1",
            params![
                id.as_i64(),
                if collection.favorite { 1i64 } else { 0i64 },
                now_ms
            ],
        )?;

        tx.commit()?;
        Ok(collection)
    }

    /// Inserts the starter collections, but only into an empty store. Returns
    /// how many were inserted (zero when anything already exists).
    pub fn seed_demo_collections(&mut self) -> Result<usize, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM collections", [], |row| row.get(0))?;
        if existing > 0 {
            tx.commit()?;
            return Ok(0);
        }

        for (name, favorite) in SEED_COLLECTIONS {
            tx.execute(
                "INSERT INTO collections(name, is_favorite, created_at_ms, updated_at_ms) \
                 VALUES (?1, ?2, ?3, ?3)",
                params![name, if *favorite { 1i64 } else { 0i64 }, now_ms],
            )?;
        }

        tx.commit()?;
        Ok(SEED_COLLECTIONS.len())
    }
}
