#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS tasks (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          date_ms INTEGER,
          completed INTEGER NOT NULL DEFAULT 0,
          collection_id INTEGER NOT NULL REFERENCES collections(id),
          parent_id INTEGER REFERENCES tasks(id),
          sort_order INTEGER,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );
"#;
