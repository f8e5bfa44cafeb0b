#![forbid(unsafe_code)]

use super::super::*;
use nd_core::ids::TaskId;
use nd_core::model::Task;
use super::super::support::get_task;

impl SqliteStore {
    pub fn get_task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        get_task(&self.conn, id)
    }
}
