use std::fmt::{Display, Formatter};

/// A single to-do item.
///
/// Title and date never change after construction. Completion only moves
/// from not completed to completed.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Task {
    title: String,
    date: String,
    completed: bool,
}

/// Display form of a task's completion flag.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub enum Status {
    #[default]
    NotCompleted,
    Completed,
}

impl Task {
    /// Creates a task that is not yet completed.
    ///
    /// The date is free-form text and is never parsed.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            completed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn status(&self) -> Status {
        if self.completed {
            Status::Completed
        } else {
            Status::NotCompleted
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotCompleted => f.pad("Not Completed"),
            Status::Completed => f.pad("Completed"),
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.title, self.date, self.status())
    }
}
