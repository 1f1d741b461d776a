use crate::error::{ConfigError, ConfigErrorResult};
use crate::{
    DEFAULT_SWEEP_CONCURRENCY, DEFAULT_SWEEP_INTERVAL_HOURS, MAX_SWEEP_CONCURRENCY,
    MIN_SWEEP_CONCURRENCY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SweepConfig {
    /// Bearer key for the expiry sweep endpoint. Requests are rejected
    /// while this is unset.
    pub key: Option<String>,

    /// Hours between scheduled in-process sweeps. 0 disables the
    /// scheduler in favor of an external cron hitting the endpoint.
    pub interval_hours: u64,

    /// Upper bound on users processed at once during a sweep.
    pub concurrency: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            key: None,
            interval_hours: DEFAULT_SWEEP_INTERVAL_HOURS,
            concurrency: DEFAULT_SWEEP_CONCURRENCY,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.concurrency < MIN_SWEEP_CONCURRENCY || self.concurrency > MAX_SWEEP_CONCURRENCY {
            return Err(ConfigError::sweep(format!(
                "concurrency must be between {MIN_SWEEP_CONCURRENCY} and {MAX_SWEEP_CONCURRENCY}, got {}",
                self.concurrency
            )));
        }
        if let Some(key) = &self.key {
            if key.trim().is_empty() {
                return Err(ConfigError::sweep("key must not be blank when set"));
            }
        }
        Ok(())
    }
}
