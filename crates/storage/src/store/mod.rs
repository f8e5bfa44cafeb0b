#![forbid(unsafe_code)]

mod collections;
mod error;
mod requests;
mod stats;
mod support;
mod tasks;

pub use error::StoreError;
pub use requests::*;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

use self::support::install_schema;

/// SQLite-backed persistence for collections and tasks. All multi-row
/// mutations run inside a single transaction; either every statement of a
/// cascade applies or none do.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join("nestdo.db");
        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        install_schema(&conn)?;

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}
