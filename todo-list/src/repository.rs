use crate::{Error, Task};

/// Ordered, in-memory collection of tasks.
///
/// Insertion order is display order. Tasks are addressed by their current
/// 0-based position, so removing a task shifts every later task down by one.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: vec![] }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a new, not completed task.
    pub fn add(&mut self, title: impl Into<String>, date: impl Into<String>) {
        self.tasks.push(Task::new(title, date));
    }

    /// Removes and returns the task at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, Error> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Marks the task at `index` as completed. Completing twice is a no-op.
    pub fn mark_completed_at(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        self.tasks[index].mark_completed();
        Ok(())
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index,
                len: self.tasks.len(),
            })
        }
    }
}
