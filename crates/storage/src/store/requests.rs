#![forbid(unsafe_code)]

use nd_core::ids::{CollectionId, TaskId};

#[derive(Clone, Debug)]
pub struct CollectionCreateRequest {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct TaskCreateRequest {
    pub title: String,
    pub collection_id: CollectionId,
    pub date_ms: Option<i64>,
    pub parent_id: Option<TaskId>,
}

/// Partial patch: `None` leaves the field untouched. `date_ms` and
/// `parent_id` are clearable, so they carry a second `Option` for the stored
/// value itself.
#[derive(Clone, Debug, Default)]
pub struct TaskUpdateRequest {
    pub title: Option<String>,
    pub date_ms: Option<Option<i64>>,
    pub completed: Option<bool>,
    pub parent_id: Option<Option<TaskId>>,
    pub sort_order: Option<i64>,
}

impl TaskUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date_ms.is_none()
            && self.completed.is_none()
            && self.parent_id.is_none()
            && self.sort_order.is_none()
    }
}

/// Outcome of a cascade delete: the owning collection (for invalidation) and
/// the number of rows removed, the task itself included.
#[derive(Clone, Copy, Debug)]
pub struct CascadeDelete {
    pub collection_id: CollectionId,
    pub deleted: usize,
}
