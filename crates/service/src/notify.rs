#![forbid(unsafe_code)]

use crate::support::ts_ms_to_rfc3339;
use nd_core::ids::CollectionId;
use nd_core::model::{CollectionStats, Task};
use serde::Serialize;

/// A live consumer of change messages, typically one connected UI client.
/// Delivery is fire-and-forget: no acknowledgement, no retry, and nothing is
/// replayed to listeners that attach later.
pub trait ChangeListener {
    fn deliver(&self, message: &str);
}

/// Broadcast fan-out to every current listener. Registration bookkeeping
/// (connect, disconnect) belongs to the transport that owns the listeners.
#[derive(Default)]
pub struct ChangeHub {
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Serializes once and hands the same message to every listener.
    pub fn publish(&self, event: &ChangeEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let Ok(message) = serde_json::to_string(event) else {
            return;
        };
        for listener in &self.listeners {
            listener.deliver(&message);
        }
    }
}

/// Wire shape `{"type": "...", "data": {...}}` with camelCase payload
/// fields, matching what the frontend expects over its push channel.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ChangeEvent {
    #[serde(rename = "taskUpdate")]
    TaskUpdate(TaskPayload),
    #[serde(rename = "statsUpdate")]
    StatsUpdate(StatsPayload),
}

impl ChangeEvent {
    pub fn task_update(task: &Task) -> Self {
        Self::TaskUpdate(TaskPayload {
            id: task.id.as_i64(),
            title: task.title.clone(),
            date: task.date_ms.map(ts_ms_to_rfc3339),
            completed: task.completed,
            collection_id: task.collection_id.as_i64(),
            parent_id: task.parent_id.map(|id| id.as_i64()),
            order: task.sort_order,
            created_at: ts_ms_to_rfc3339(task.created_at_ms),
            updated_at: ts_ms_to_rfc3339(task.updated_at_ms),
        })
    }

    pub fn stats_update(collection_id: CollectionId, stats: &CollectionStats) -> Self {
        Self::StatsUpdate(StatsPayload {
            collection_id: collection_id.as_i64(),
            task_count: stats.task_count(),
            completed_count: stats.completed_count(),
            last_updated: ts_ms_to_rfc3339(stats.last_updated_ms()),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub completed: bool,
    pub collection_id: i64,
    pub parent_id: Option<i64>,
    pub order: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub collection_id: i64,
    pub task_count: i64,
    pub completed_count: i64,
    pub last_updated: String,
}
