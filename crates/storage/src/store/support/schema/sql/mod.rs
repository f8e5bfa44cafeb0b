#![forbid(unsafe_code)]

mod collections;
mod indexes;
mod pragmas;
mod tasks;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(pragmas::SQL);
    sql.push_str(collections::SQL);
    sql.push_str(tasks::SQL);
    sql.push_str(indexes::SQL);
    sql
}
