#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_tasks_collection ON tasks(collection_id, parent_id, sort_order, created_at_ms);
        CREATE INDEX IF NOT EXISTS idx_tasks_parent ON tasks(parent_id);
"#;
