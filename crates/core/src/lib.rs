#![forbid(unsafe_code)]

pub mod order;

pub mod ids {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CollectionId(i64);

    impl CollectionId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn as_i64(self) -> i64 {
            self.0
        }
    }

    impl std::fmt::Display for CollectionId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct TaskId(i64);

    impl TaskId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn as_i64(self) -> i64 {
            self.0
        }
    }

    impl std::fmt::Display for TaskId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}

pub mod model {
    use super::ids::{CollectionId, TaskId};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Collection {
        pub id: CollectionId,
        pub name: String,
        pub favorite: bool,
        pub created_at_ms: i64,
        pub updated_at_ms: i64,
    }

    /// A collection plus the task counters the list views render. The counts
    /// cover every task in the collection, subtasks included.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CollectionSummary {
        pub collection: Collection,
        pub task_count: i64,
        pub completed_count: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Task {
        pub id: TaskId,
        pub title: String,
        pub date_ms: Option<i64>,
        pub completed: bool,
        pub collection_id: CollectionId,
        pub parent_id: Option<TaskId>,
        pub sort_order: Option<i64>,
        pub created_at_ms: i64,
        pub updated_at_ms: i64,
    }

    impl Task {
        pub fn is_subtask(&self) -> bool {
            self.parent_id.is_some()
        }
    }

    /// A top-level task with its direct subtasks attached. Nesting is exactly
    /// one level deep; subtasks never carry subtasks of their own.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TaskTree {
        pub task: Task,
        pub subtasks: Vec<Task>,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CollectionStats {
        task_count: i64,
        completed_count: i64,
        last_updated_ms: i64,
    }

    impl CollectionStats {
        pub fn try_new(
            task_count: i64,
            completed_count: i64,
            last_updated_ms: i64,
        ) -> Result<Self, CollectionStatsError> {
            if task_count < 0 || completed_count < 0 {
                return Err(CollectionStatsError::NegativeCount);
            }
            if completed_count > task_count {
                return Err(CollectionStatsError::CompletedExceedsTotal);
            }
            Ok(Self {
                task_count,
                completed_count,
                last_updated_ms,
            })
        }

        pub fn task_count(&self) -> i64 {
            self.task_count
        }

        pub fn completed_count(&self) -> i64 {
            self.completed_count
        }

        pub fn last_updated_ms(&self) -> i64 {
            self.last_updated_ms
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CollectionStatsError {
        NegativeCount,
        CompletedExceedsTotal,
    }

}
