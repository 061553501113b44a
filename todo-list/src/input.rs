//! Validation of user-supplied values before they reach the store.

use crate::persistence::DELIMITER;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter both title and date.")]
    MissingField,
    #[error("Title and date may not contain '|'.")]
    ContainsDelimiter,
    #[error("Title and date may not contain line breaks.")]
    ContainsLineBreak,
    #[error("Invalid task index.")]
    InvalidPosition,
}

/// A title and date that are safe to store and persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    title: String,
    date: String,
}

impl TaskInput {
    /// Rejects blank fields and fields containing the file delimiter or a
    /// line break, either of which would split the persisted record.
    ///
    /// Values are stored as typed, surrounding whitespace included.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Result<Self, InputError> {
        let title = title.into();
        let date = date.into();
        if title.trim().is_empty() || date.trim().is_empty() {
            return Err(InputError::MissingField);
        }
        if title.contains(DELIMITER) || date.contains(DELIMITER) {
            return Err(InputError::ContainsDelimiter);
        }
        if title.contains(['\n', '\r']) || date.contains(['\n', '\r']) {
            return Err(InputError::ContainsLineBreak);
        }
        Ok(Self { title, date })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.title, self.date)
    }
}

/// Converts a 1-based position typed by the user into a 0-based index.
pub fn parse_position(text: &str) -> Result<usize, InputError> {
    match text.trim().parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(InputError::InvalidPosition),
    }
}
