mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sweep_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sweep_config::SweepConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "habits.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_SWEEP_INTERVAL_HOURS: u64 = 0;
const DEFAULT_SWEEP_CONCURRENCY: usize = 4;

const MIN_PORT: u16 = 1024;
const MIN_SWEEP_CONCURRENCY: usize = 1;
const MAX_SWEEP_CONCURRENCY: usize = 64;
