use std::sync::Arc;

use crate::storage::{self, KeyValueStore};
use crate::types::Application;

/// Key the application list is stored under.
pub const STORAGE_KEY: &str = "job-tracker-data";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] storage::StorageError),

    #[error("Failed to serialize applications: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Mirrors the application list to a key-value store as a JSON array.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored list. Absent, unreadable or malformed values all load as
    /// an empty list.
    pub async fn load(&self) -> Vec<Application> {
        let raw = match self.store.get(STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("no stored applications, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored applications, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Application>>(&raw) {
            Ok(applications) => {
                tracing::info!(count = applications.len(), "loaded stored applications");
                applications
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored applications are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored value with the full list.
    pub async fn save(&self, applications: &[Application]) -> Result<(), PersistError> {
        let raw = serde_json::to_string(applications)?;
        self.store.set(STORAGE_KEY, &raw).await?;
        tracing::debug!(count = applications.len(), "persisted applications");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::Status;

    fn application(id: i64, company: &str, role: &str, status: Status, date: &str) -> Application {
        Application {
            id,
            company: company.to_string(),
            role: role.to_string(),
            status,
            date: date.to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn absent_value_loads_empty() {
        let persistence = Persistence::new(Arc::new(MemoryStore::new()));
        assert!(persistence.load().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_value_loads_empty() {
        let store = MemoryStore::new().with_value(STORAGE_KEY, "{not json");
        let persistence = Persistence::new(Arc::new(store));
        assert!(persistence.load().await.is_empty());
    }

    #[tokio::test]
    async fn saved_list_round_trips_in_order() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(Arc::new(store.clone()));
        let list = vec![
            application(2, "Globex", "Analyst", Status::Interview, "2024-01-12"),
            application(1, "Acme", "Engineer", Status::Applied, "2024-01-10"),
        ];

        persistence.save(&list).await.unwrap();

        let raw = store.value(STORAGE_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(persistence.load().await, list);
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(Arc::new(store.clone()));

        persistence
            .save(&[application(1, "Acme", "Engineer", Status::Applied, "2024-01-10")])
            .await
            .unwrap();
        persistence.save(&[]).await.unwrap();

        assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("[]"));
    }
}
