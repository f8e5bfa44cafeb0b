#![forbid(unsafe_code)]

use crate::TaskService;
use crate::notify::ChangeEvent;
use nd_core::ids::{CollectionId, TaskId};
use nd_core::model::{Task, TaskTree};
use nd_storage::{CascadeDelete, StoreError, TaskCreateRequest, TaskUpdateRequest};

impl TaskService {
    pub fn create_task(&mut self, request: TaskCreateRequest) -> Result<Task, StoreError> {
        let task = self.store.create_task(request)?;
        self.task_changed(&task);
        Ok(task)
    }

    pub fn get_task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        self.store.get_task(id)
    }

    pub fn list_tasks_by_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<TaskTree>, StoreError> {
        self.store.list_tasks_by_collection(collection_id)
    }

    pub fn update_task(
        &mut self,
        id: TaskId,
        request: TaskUpdateRequest,
    ) -> Result<Task, StoreError> {
        let task = self.store.update_task(id, request)?;
        self.task_changed(&task);
        Ok(task)
    }

    /// Flips completion on one task only; subtasks keep their own state.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let task = self.store.toggle_task_completion(id)?;
        self.task_changed(&task);
        Ok(task)
    }

    /// Cascade completion: the explicit target value lands on the task and
    /// every direct subtask. Not a toggle: completing a parent must force
    /// children to the same state regardless of where they were.
    pub fn complete_with_subtasks(
        &mut self,
        id: TaskId,
        complete: bool,
    ) -> Result<Task, StoreError> {
        let task = self.store.complete_with_subtasks(id, complete)?;
        self.task_changed(&task);
        Ok(task)
    }

    pub fn reorder_siblings(&mut self, ids: &[TaskId]) -> Result<(), StoreError> {
        let collection_id = self.store.reorder_siblings(ids)?;
        self.collection_changed(collection_id);
        Ok(())
    }

    pub fn delete_with_subtasks(&mut self, id: TaskId) -> Result<CascadeDelete, StoreError> {
        let outcome = self.store.delete_task_cascade(id)?;
        self.collection_changed(outcome.collection_id);
        Ok(outcome)
    }

    fn task_changed(&mut self, task: &Task) {
        self.hub.publish(&ChangeEvent::task_update(task));
        self.collection_changed(task.collection_id);
    }

    /// Invalidation happens in the same call as the mutation, never deferred.
    /// The stats broadcast is best-effort: a failed recompute is simply
    /// retried by the next stats read.
    fn collection_changed(&mut self, collection_id: CollectionId) {
        self.stats.invalidate(collection_id);
        if self.hub.listener_count() == 0 {
            return;
        }
        if let Ok(stats) = self.get_stats(collection_id) {
            self.hub
                .publish(&ChangeEvent::stats_update(collection_id, &stats));
        }
    }
}
