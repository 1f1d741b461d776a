use crate::log_level::LogLevel;
use crate::DEFAULT_LOG_DIRECTORY;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for log files, resolved relative to the config directory.
    pub directory: String,
    /// File name inside `directory`. None logs to stdout only.
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directory: DEFAULT_LOG_DIRECTORY.to_string(),
            file: None,
            colored: true,
        }
    }
}
