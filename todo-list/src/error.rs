use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the task store and its persistence.
///
/// None of these are fatal: frontends report them and keep running with the
/// in-memory state untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// A task position outside `0..len` was referenced
    #[error("Invalid task index {index}: {len} task(s) available")]
    InvalidIndex { index: usize, len: usize },
    /// Reading or writing the task file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
