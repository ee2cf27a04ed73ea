//! Persistence Gate
//!
//! Keeps the task list in two storage entries: the JSON snapshot and the
//! time it was written. Snapshots older than the configured TTL are dropped
//! on load. Every write replaces the whole snapshot.

use thiserror::Error;

use crate::config::AppConfig;
use crate::models::Task;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a stored snapshot was not used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Missing,
    Expired { age_millis: i64 },
    BadTimestamp(String),
    Malformed(String),
    Unreadable(String),
}

pub struct PersistenceGate<S: KeyValueStore> {
    store: S,
    todos_key: String,
    timestamp_key: String,
    ttl_millis: i64,
}

impl<S: KeyValueStore> PersistenceGate<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            todos_key: config.todos_key.clone(),
            timestamp_key: config.timestamp_key.clone(),
            ttl_millis: config.ttl_millis(),
        }
    }

    /// Load the stored tasks if they are fresh; otherwise clear both entries
    /// and start empty.
    pub fn hydrate(&self, now_millis: i64) -> Vec<Task> {
        match self.load(now_millis) {
            Ok(tasks) => {
                log::debug!(target: "PERSIST", "hydrated {} tasks", tasks.len());
                tasks
            }
            Err(reason) => {
                match &reason {
                    Rejected::Missing | Rejected::Expired { .. } => {
                        log::debug!(target: "PERSIST", "starting empty: {:?}", reason)
                    }
                    _ => log::warn!(target: "PERSIST", "discarding stored tasks: {:?}", reason),
                }
                self.clear();
                Vec::new()
            }
        }
    }

    fn load(&self, now_millis: i64) -> Result<Vec<Task>, Rejected> {
        let read = |key: &str| {
            self.store
                .get(key)
                .map_err(|e| Rejected::Unreadable(e.to_string()))
        };
        let (Some(saved), Some(timestamp)) = (read(&self.todos_key)?, read(&self.timestamp_key)?) else {
            return Err(Rejected::Missing);
        };

        let saved_at: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| Rejected::BadTimestamp(timestamp.clone()))?;
        let age_millis = now_millis
            .checked_sub(saved_at)
            .ok_or_else(|| Rejected::BadTimestamp(timestamp.clone()))?;
        if age_millis >= self.ttl_millis {
            return Err(Rejected::Expired { age_millis });
        }

        serde_json::from_str(&saved).map_err(|e| Rejected::Malformed(e.to_string()))
    }

    /// Overwrite the snapshot and its timestamp
    pub fn save(&self, tasks: &[Task], now_millis: i64) -> Result<(), PersistError> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(&self.todos_key, &json)?;
        self.store.set(&self.timestamp_key, &now_millis.to_string())?;
        Ok(())
    }

    pub fn clear(&self) {
        for key in [&self.todos_key, &self.timestamp_key] {
            if let Err(e) = self.store.remove(key) {
                log::warn!(target: "PERSIST", "failed to remove {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const MINUTE: i64 = 60 * 1000;
    const NOW: i64 = 1_700_000_000_000;

    fn gate() -> (PersistenceGate<MemoryStorage>, MemoryStorage) {
        let store = MemoryStorage::new();
        (PersistenceGate::new(store.clone(), &AppConfig::default()), store)
    }

    fn sample() -> Vec<Task> {
        let mut done = Task::new(2, "Walk dog");
        done.completed = true;
        vec![Task::new(1, "Buy milk"), done]
    }

    #[test]
    fn test_save_writes_both_entries() {
        let (gate, store) = gate();
        gate.save(&sample(), NOW).unwrap();

        assert_eq!(store.get("timestamp").unwrap(), Some(NOW.to_string()));
        let saved: Vec<Task> = serde_json::from_str(&store.get("todos").unwrap().unwrap()).unwrap();
        assert_eq!(saved, sample());
    }

    #[test]
    fn test_fresh_snapshot_is_kept() {
        let (gate, _) = gate();
        gate.save(&sample(), NOW).unwrap();

        let tasks = gate.hydrate(NOW + 14 * MINUTE);
        assert_eq!(tasks, sample());
    }

    #[test]
    fn test_expired_snapshot_is_cleared() {
        let (gate, store) = gate();
        gate.save(&sample(), NOW).unwrap();

        let tasks = gate.hydrate(NOW + 16 * MINUTE);
        assert!(tasks.is_empty());
        assert!(!store.contains("todos"));
        assert!(!store.contains("timestamp"));
    }

    #[test]
    fn test_snapshot_at_exact_ttl_is_expired() {
        let (gate, store) = gate();
        gate.save(&sample(), NOW).unwrap();

        assert!(gate.hydrate(NOW + 15 * MINUTE).is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_partial_state_is_cleared() {
        let (gate, store) = gate();
        store.set("todos", r#"[{"id":1,"text":"a","completed":false}]"#).unwrap();

        assert!(gate.hydrate(NOW).is_empty());
        assert!(!store.contains("todos"));
    }

    #[test]
    fn test_malformed_snapshot_fails_soft() {
        let (gate, store) = gate();
        store.set("todos", "{not json").unwrap();
        store.set("timestamp", &NOW.to_string()).unwrap();

        assert!(gate.hydrate(NOW + 1).is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_bad_timestamp_fails_soft() {
        let (gate, store) = gate();
        store.set("todos", "[]").unwrap();
        store.set("timestamp", "yesterday").unwrap();

        assert!(gate.hydrate(NOW).is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_extreme_timestamp_fails_soft() {
        let (gate, store) = gate();
        store.set("todos", "[]").unwrap();
        store.set("timestamp", &i64::MIN.to_string()).unwrap();

        assert!(gate.hydrate(NOW).is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_hydrate_does_not_refresh_timestamp() {
        let (gate, store) = gate();
        gate.save(&sample(), NOW).unwrap();
        gate.hydrate(NOW + MINUTE);

        assert_eq!(store.get("timestamp").unwrap(), Some(NOW.to_string()));
    }
}
