use crate::error::{ConfigError, ConfigErrorResult};
use crate::{DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Port 0 asks the OS for an ephemeral port, anything else must stay
    /// clear of the privileged range.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("host must not be empty"));
        }
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "port must be 0 or at least {MIN_PORT}, got {}",
                self.port
            )));
        }
        Ok(())
    }
}
