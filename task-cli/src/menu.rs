//! Interactive numbered menu over a line-based input and output.

use std::io::{BufRead, Write};
use todo_list::frontend::{
    Frontend, INVALID_INDEX, TASK_ADDED, TASK_COMPLETED, TASK_DELETED, render_table,
};
use todo_list::{TaskInput, TaskManager, TaskRepository, parse_position};

const BANNER: &str = "=============================";

pub struct MenuShell<I: BufRead, W: Write> {
    input: I,
    output: W,
}

enum Choice {
    Add,
    Delete,
    Complete,
    View,
    Exit,
}

impl Choice {
    fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Delete),
            "3" => Some(Choice::Complete),
            "4" => Some(Choice::View),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

impl<I: BufRead, W: Write> MenuShell<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "       Task Manager Menu     ")?;
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. Delete Task")?;
        writeln!(self.output, "3. Mark Task as Completed")?;
        writeln!(self.output, "4. View Tasks")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{BANNER}")
    }

    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, message: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn add_task<R: TaskRepository>(&mut self, manager: &mut TaskManager<R>) -> std::io::Result<()> {
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Enter task due date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        match TaskInput::new(title, date) {
            Ok(input) => {
                manager.add(input);
                writeln!(self.output, "{TASK_ADDED}")
            }
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn delete_task<R: TaskRepository>(
        &mut self,
        manager: &mut TaskManager<R>,
    ) -> std::io::Result<()> {
        let Some(position) = self.prompt("Enter task index to delete: ")? else {
            return Ok(());
        };
        let deleted = parse_position(&position)
            .ok()
            .and_then(|index| manager.remove_at(index).ok());
        match deleted {
            Some(_) => writeln!(self.output, "{TASK_DELETED}"),
            None => writeln!(self.output, "{INVALID_INDEX}"),
        }
    }

    fn complete_task<R: TaskRepository>(
        &mut self,
        manager: &mut TaskManager<R>,
    ) -> std::io::Result<()> {
        writeln!(self.output, "Available tasks:")?;
        self.view_tasks(manager)?;
        let Some(position) = self.prompt("Enter task index to mark as completed: ")? else {
            return Ok(());
        };
        let completed = parse_position(&position)
            .ok()
            .and_then(|index| manager.mark_completed_at(index).ok());
        match completed {
            Some(()) => writeln!(self.output, "{TASK_COMPLETED}"),
            None => writeln!(self.output, "{INVALID_INDEX}"),
        }
    }

    fn view_tasks<R: TaskRepository>(&mut self, manager: &TaskManager<R>) -> std::io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_table(manager.tasks()))
    }

    fn exit<R: TaskRepository>(&mut self, manager: &TaskManager<R>) -> std::io::Result<()> {
        match manager.save() {
            Ok(()) => writeln!(self.output, "Tasks saved. Exiting..."),
            Err(e) => writeln!(self.output, "Error saving tasks: {e}"),
        }
    }
}

impl<R: TaskRepository, I: BufRead, W: Write> Frontend<R> for MenuShell<I, W> {
    /// Loops until the user picks Exit or input ends; both save first.
    fn run(&mut self, manager: &mut TaskManager<R>) -> std::io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return self.exit(manager);
            };
            match Choice::parse(&choice) {
                Some(Choice::Add) => self.add_task(manager)?,
                Some(Choice::Delete) => self.delete_task(manager)?,
                Some(Choice::Complete) => self.complete_task(manager)?,
                Some(Choice::View) => self.view_tasks(manager)?,
                Some(Choice::Exit) => return self.exit(manager),
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }
}
