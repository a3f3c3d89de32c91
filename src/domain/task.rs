use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Task names are display text and may collide within a project; every
/// operation that matches a task (move, delete, finish) keys on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task on the board.
///
/// The creation timestamp is set once and never changes; moving a task
/// between columns carries it along unchanged. Blobs written before ids
/// existed deserialize with a freshly generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl Task {
    /// Creates a new task stamped with the current instant
    pub fn new(name: String) -> Self {
        Self {
            id: TaskId::generate(),
            name,
            timestamp: Utc::now(),
        }
    }

    /// Converts the task into its archived form, stamped with the current
    /// instant. One-way: a finished task never re-enters the active board.
    pub fn finish(self) -> FinishedTask {
        FinishedTask {
            id: self.id,
            name: self.name,
            timestamp: self.timestamp,
            finished_at: Utc::now(),
        }
    }
}

/// A task that has completed the Done-to-finished transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedTask {
    #[serde(default)]
    pub id: TaskId,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "finishedAt")]
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let before = Utc::now();
        let task = Task::new("Write spec".to_string());

        assert_eq!(task.name, "Write spec");
        assert!(task.timestamp >= before);
        assert!(task.timestamp <= Utc::now());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("Same name".to_string());
        let b = Task::new("Same name".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_finish_preserves_creation_timestamp() {
        let task = Task::new("Ship it".to_string());
        let id = task.id;
        let created = task.timestamp;

        let finished = task.finish();

        assert_eq!(finished.id, id);
        assert_eq!(finished.name, "Ship it");
        assert_eq!(finished.timestamp, created);
        assert!(finished.finished_at >= created);
    }

    #[test]
    fn test_finished_task_wire_format() {
        let finished = Task::new("Ship it".to_string()).finish();
        let json = serde_json::to_string(&finished).unwrap();

        assert!(json.contains("\"finishedAt\""));
        assert!(!json.contains("finished_at"));
    }

    #[test]
    fn test_legacy_task_without_id_deserializes() {
        let json = r#"{"name": "Old task", "timestamp": "2024-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.name, "Old task");
        assert_eq!(task.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_task_round_trip() {
        let task = Task::new("Round trip".to_string());
        let json = serde_json::to_string(&task).unwrap();
        let loaded: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, task);
    }
}
