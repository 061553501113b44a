//! Core of the task list manager.
//!
//! Holds the in-memory [`TaskStore`], the pipe-delimited [`TaskFile`] it is
//! persisted to, and the [`Frontend`] capability the presentation shells
//! implement on top of a [`TaskManager`].

mod error;
pub mod frontend;
pub mod input;
mod manager;
pub mod persistence;
mod repository;
mod task;

pub use error::Error;
pub use frontend::Frontend;
pub use input::{InputError, TaskInput, parse_position};
pub use manager::TaskManager;
pub use persistence::{TaskFile, TaskRepository};
pub use repository::TaskStore;
pub use task::{Status, Task};
