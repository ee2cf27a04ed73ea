//! Frontend Models
//!
//! Task record as stored in the `todos` snapshot.

use serde::{Deserialize, Serialize};

/// Task identifier (epoch milliseconds at creation)
pub type TaskId = i64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Edit dialog state: which task is being edited and its unsaved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: TaskId,
    pub draft: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_layout() {
        let task = Task::new(1_700_000_000_123, "Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":1700000000123,"text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_task_reads_snapshot_entry() {
        let task: Task = serde_json::from_str(r#"{"id":42,"text":"Walk dog","completed":true}"#).unwrap();
        assert_eq!(task.id, 42);
        assert_eq!(task.text, "Walk dog");
        assert!(task.completed);
    }
}
