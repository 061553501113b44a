use crate::{Error, Task, TaskInput, TaskRepository, TaskStore};
use log::{info, warn};

/// A task store bound to the repository it is loaded from and saved to.
///
/// Frontends drive every operation through this type. Failed operations
/// never alter the in-memory store.
pub struct TaskManager<R: TaskRepository> {
    store: TaskStore,
    repository: R,
}

impl<R: TaskRepository> TaskManager<R> {
    /// Creates a manager with an empty store. Call [`TaskManager::reload`]
    /// to pick up persisted tasks.
    pub fn new(repository: R) -> Self {
        Self {
            store: TaskStore::new(),
            repository,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn add(&mut self, input: TaskInput) {
        let (title, date) = input.into_parts();
        info!("Adding task '{title}' due {date}");
        self.store.add(title, date);
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Task, Error> {
        let removed = self.store.remove_at(index).inspect_err(|e| warn!("{e}"))?;
        info!("Removed task '{}'", removed.title());
        Ok(removed)
    }

    pub fn mark_completed_at(&mut self, index: usize) -> Result<(), Error> {
        self.store
            .mark_completed_at(index)
            .inspect_err(|e| warn!("{e}"))?;
        info!("Marked task at index {index} as completed");
        Ok(())
    }

    pub fn save(&self) -> Result<(), Error> {
        self.repository
            .save(&self.store)
            .inspect_err(|e| warn!("Saving tasks failed: {e}"))
    }

    /// Replaces the whole store with the persisted tasks and returns how many
    /// were loaded. On failure the current store is kept.
    pub fn reload(&mut self) -> Result<usize, Error> {
        let store = self
            .repository
            .load()
            .inspect_err(|e| warn!("Loading tasks failed: {e}"))?;
        self.store = store;
        Ok(self.store.len())
    }
}
