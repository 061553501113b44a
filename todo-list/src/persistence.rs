//! Pipe-delimited task file.
//!
//! The file starts with the fixed header `Title|Date|Status` followed by one
//! `<title>|<date>|<true|false>` line per task, in store order:
//!
//! ```text
//! Title|Date|Status
//! Buy milk|2024-01-15|false
//! Finish report|2024-01-20|true
//! ```
//!
//! Fields are not escaped. A title or date containing `|` produces a line with
//! more than three fields, which is skipped on the next load, so frontends
//! reject such input before it reaches the store.

use crate::{Error, Task, TaskStore};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

pub const HEADER: &str = "Title|Date|Status";
pub const DELIMITER: char = '|';

/// Storage the task manager loads from and saves to.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    /// Loads the persisted tasks. A missing store loads as empty.
    fn load(&self) -> Result<TaskStore, Error>;
    /// Replaces the persisted tasks with the contents of `store`.
    fn save(&self, store: &TaskStore) -> Result<(), Error>;
}

/// Task repository backed by a pipe-delimited text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl TaskRepository for TaskFile {
    fn load(&self) -> Result<TaskStore, Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No task file at {}", self.path.display());
                return Ok(TaskStore::new());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        let store = read_tasks(BufReader::new(file)).map_err(|e| Error::io(&self.path, e))?;
        info!("Loaded {} tasks from {}", store.len(), self.path.display());
        Ok(store)
    }

    fn save(&self, store: &TaskStore) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        write_tasks(&mut writer, store)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(&self.path, e))?;
        info!("Saved {} tasks to {}", store.len(), self.path.display());
        Ok(())
    }
}

/// Writes the header and one line per task.
pub fn write_tasks(mut writer: impl Write, store: &TaskStore) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for task in store.list() {
        writeln!(
            writer,
            "{}{DELIMITER}{}{DELIMITER}{}",
            task.title(),
            task.date(),
            task.is_completed()
        )?;
    }
    Ok(())
}

/// Reads tasks, discarding the first line unchecked.
///
/// Lines that do not split into exactly three fields, ignoring trailing
/// empty ones, are skipped.
pub fn read_tasks(reader: impl BufRead) -> std::io::Result<TaskStore> {
    let mut tasks = vec![];
    for line in reader.lines().skip(1) {
        let line = line?;
        match parse_line(&line) {
            Some(task) => tasks.push(task),
            None => debug!("Skipping malformed task line: {line:?}"),
        }
    }
    Ok(TaskStore::from_tasks(tasks))
}

fn parse_line(line: &str) -> Option<Task> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    // Trailing empty fields do not count.
    while fields.last() == Some(&"") {
        fields.pop();
    }
    let [title, date, status] = fields.as_slice() else {
        return None;
    };
    let mut task = Task::new(*title, *date);
    if parse_completed(status) {
        task.mark_completed();
    }
    Some(task)
}

/// Only `true`, in any case, counts as completed.
fn parse_completed(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}
