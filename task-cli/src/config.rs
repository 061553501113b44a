use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "task-cli";
pub const DEFAULT_TASK_FILE: &str = "TaskManager/tasks.txt";
pub const ENV_PREFIX: &str = "TASK_CLI";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_task_file")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_task_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file and `TASK_CLI_*` environment
    /// variables, e.g. `TASK_CLI_STORAGE__PATH`.
    ///
    /// An explicit `file` must exist. Without one, `task-cli.toml` in the
    /// working directory is used when present.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn default_task_file() -> PathBuf {
    PathBuf::from(DEFAULT_TASK_FILE)
}

fn default_log_level() -> String {
    "warn".to_string()
}
