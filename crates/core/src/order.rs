#![forbid(unsafe_code)]

//! Sibling ordering. Display order within one sibling group is an integer
//! column assigned from the position in the caller-supplied list; rows whose
//! stored order already matches their new position are skipped.

use crate::ids::TaskId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderWrite {
    pub task: TaskId,
    pub sort_order: i64,
}

/// Plans the writes for reordering one sibling group into `desired`.
///
/// `current` carries the stored `sort_order` for every task in the group.
/// Tasks absent from `current` are treated as unordered and always written.
pub fn plan_reorder(desired: &[TaskId], current: &[(TaskId, Option<i64>)]) -> Vec<OrderWrite> {
    let mut writes = Vec::new();
    for (index, task) in desired.iter().copied().enumerate() {
        let target = index as i64;
        let stored = current
            .iter()
            .find(|(id, _)| *id == task)
            .and_then(|(_, order)| *order);
        if stored == Some(target) {
            continue;
        }
        writes.push(OrderWrite {
            task,
            sort_order: target,
        });
    }
    writes
}
