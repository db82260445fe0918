use crate::core::scenarios::DEFAULT_USERS_ENDPOINT;
use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_READ_DELAY_MS, DEFAULT_SETTLE_DELAY_MS, DEFAULT_WRITE_DELAY_MS};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_delay_order, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_DELAY_MS: u64 = 60_000;

/// Demo settings as read from a TOML file. Missing keys fall back to the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub users_endpoint: String,
    pub timings: TimingsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub read_delay_ms: u64,
    pub write_delay_ms: u64,
    pub settle_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            timings: TimingsConfig::default(),
        }
    }
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            read_delay_ms: DEFAULT_READ_DELAY_MS,
            write_delay_ms: DEFAULT_WRITE_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for DemoConfig {
    fn users_endpoint(&self) -> &str {
        &self.users_endpoint
    }

    fn read_delay(&self) -> Duration {
        Duration::from_millis(self.timings.read_delay_ms)
    }

    fn write_delay(&self) -> Duration {
        Duration::from_millis(self.timings.write_delay_ms)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.timings.settle_delay_ms)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("users_endpoint", &self.users_endpoint)?;
        validate_range("read_delay_ms", self.timings.read_delay_ms, 0, MAX_DELAY_MS)?;
        validate_range("write_delay_ms", self.timings.write_delay_ms, 0, MAX_DELAY_MS)?;
        validate_range("settle_delay_ms", self.timings.settle_delay_ms, 0, MAX_DELAY_MS)?;
        validate_delay_order(self.read_delay(), self.write_delay())
    }
}
