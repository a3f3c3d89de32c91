use crate::{error::Result, storage::Storage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory key-value store, used in tests and by embedders that manage
/// persistence themselves
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| crate::error::KaamdhaamError::StorageError("mutex poisoned".into()))?;
        Ok(blobs.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| crate::error::KaamdhaamError::StorageError("mutex poisoned".into()))?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
