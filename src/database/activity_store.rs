use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{ActivityDirectory, ActivityRecord};

/// Process-wide activity directory.
///
/// Cloning the store clones the handle, not the data. Every mutation runs
/// under the write lock so concurrent signups on one activity cannot lose
/// updates.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    directory: Arc<RwLock<ActivityDirectory>>,
    seed: Arc<ActivityDirectory>,
}

impl ActivityStore {
    pub fn new(seed: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(seed.clone())),
            seed: Arc::new(seed),
        }
    }

    /// Owned copy of the current directory.
    pub async fn snapshot(&self) -> ActivityDirectory {
        self.directory.read().await.clone()
    }

    /// Runs `f` on the named activity while holding the write lock.
    /// Returns `None` if no activity has that exact name.
    pub async fn with_activity_mut<R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut ActivityRecord) -> R,
    ) -> Option<R> {
        let mut dir = self.directory.write().await;
        dir.get_mut(name).map(f)
    }

    /// Puts the directory back to the state it was created with.
    pub async fn reset(&self) {
        let mut dir = self.directory.write().await;
        *dir = (*self.seed).clone();
    }
}
