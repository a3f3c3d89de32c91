use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Key the project list is stored under
pub const PROJECTS_KEY: &str = "projects";
/// Key the per-project task columns are stored under
pub const TASKS_KEY: &str = "tasks";
/// Key the per-project finished-task archives are stored under
pub const FINISHED_TASKS_KEY: &str = "finishedTasks";

/// Opaque key-value blob store the board persists through.
///
/// The core reads the three fixed keys once at startup and rewrites all
/// three together after every mutation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the blob stored under a key, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the blob stored under a key
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
