//! The capability shared by every presentation shell.

use crate::{Task, TaskManager, TaskRepository};

pub const TASK_ADDED: &str = "Task added successfully.";
pub const TASK_DELETED: &str = "Task deleted successfully.";
pub const TASK_COMPLETED: &str = "Task marked as completed.";
pub const INVALID_INDEX: &str = "Invalid task index.";
pub const NO_TASKS: &str = "No tasks available.";

/// A shell that renders tasks and dispatches user actions to a manager.
///
/// Errors returned from `run` are terminal I/O faults of the shell itself.
/// Task and persistence errors are reported to the user and do not end the
/// session.
pub trait Frontend<R: TaskRepository> {
    fn run(&mut self, manager: &mut TaskManager<R>) -> std::io::Result<()>;
}

/// Renders tasks as a numbered table with 1-based positions.
pub fn render_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{NO_TASKS}\n");
    }
    let header = format!("# | {:<30} | {:<12} | {}\n", "Title", "Date", "Status");
    let separator = format!("{}\n", "-".repeat(66));
    let rows = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            format!(
                "{} | {:<30} | {:<12} | {:<15}\n",
                i + 1,
                task.title(),
                task.date(),
                task.status()
            )
        })
        .collect::<String>();
    header + &separator + &rows
}
