//! One-shot subcommands. Every mutation is saved before the process exits.

use clap::Subcommand;
use std::io::Write;
use todo_list::frontend::{
    Frontend, INVALID_INDEX, TASK_ADDED, TASK_COMPLETED, TASK_DELETED, render_table,
};
use todo_list::{TaskInput, TaskManager, TaskRepository, parse_position};

const NOT_LOADED: &str = "Task file could not be loaded; no changes were made.";

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Add a task
    Add {
        title: String,
        /// Due date, e.g. 2024-01-15
        date: String,
    },
    /// Delete the task at a 1-based position
    Delete { position: String },
    /// Mark the task at a 1-based position as completed
    Complete { position: String },
    /// Show all tasks
    List,
}

impl Action {
    fn is_mutation(&self) -> bool {
        !matches!(self, Action::List)
    }
}

pub struct CommandShell<W: Write> {
    action: Action,
    loaded: bool,
    output: W,
}

impl<W: Write> CommandShell<W> {
    pub fn new(action: Action, output: W) -> Self {
        Self {
            action,
            loaded: true,
            output,
        }
    }

    /// Whether the task file was read successfully at startup. Mutations are
    /// refused otherwise, since saving would overwrite the unread tasks.
    pub fn loaded(mut self, loaded: bool) -> Self {
        self.loaded = loaded;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn save_and_report<R: TaskRepository>(
        &mut self,
        manager: &TaskManager<R>,
        message: &str,
    ) -> std::io::Result<()> {
        match manager.save() {
            Ok(()) => writeln!(self.output, "{message}"),
            Err(e) => writeln!(self.output, "Error saving tasks: {e}"),
        }
    }
}

impl<R: TaskRepository, W: Write> Frontend<R> for CommandShell<W> {
    fn run(&mut self, manager: &mut TaskManager<R>) -> std::io::Result<()> {
        if !self.loaded && self.action.is_mutation() {
            return writeln!(self.output, "{NOT_LOADED}");
        }
        match self.action.clone() {
            Action::Add { title, date } => match TaskInput::new(title, date) {
                Ok(input) => {
                    manager.add(input);
                    self.save_and_report(manager, TASK_ADDED)
                }
                Err(e) => writeln!(self.output, "{e}"),
            },
            Action::Delete { position } => {
                let deleted = parse_position(&position)
                    .ok()
                    .and_then(|index| manager.remove_at(index).ok());
                match deleted {
                    Some(_) => self.save_and_report(manager, TASK_DELETED),
                    None => writeln!(self.output, "{INVALID_INDEX}"),
                }
            }
            Action::Complete { position } => {
                let completed = parse_position(&position)
                    .ok()
                    .and_then(|index| manager.mark_completed_at(index).ok());
                match completed {
                    Some(()) => self.save_and_report(manager, TASK_COMPLETED),
                    None => writeln!(self.output, "{INVALID_INDEX}"),
                }
            }
            Action::List => write!(self.output, "{}", render_table(manager.tasks())),
        }
    }
}
