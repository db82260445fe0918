pub mod toml_config;

pub use toml_config::DemoConfig;

#[cfg(feature = "cli")]
use crate::core::scenarios::Scenario;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "async-posts")]
#[command(about = "Callback, promise and async/await demos over an in-memory post list")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "all")]
    pub scenario: Scenario,

    /// TOML file with demo settings; flags below override it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub users_endpoint: Option<String>,

    #[arg(long)]
    pub read_delay_ms: Option<u64>,

    #[arg(long)]
    pub write_delay_ms: Option<u64>,

    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and applies the command line overrides.
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(endpoint) = &self.users_endpoint {
            config.users_endpoint = endpoint.clone();
        }
        if let Some(ms) = self.read_delay_ms {
            config.timings.read_delay_ms = ms;
        }
        if let Some(ms) = self.write_delay_ms {
            config.timings.write_delay_ms = ms;
        }
        if let Some(ms) = self.settle_delay_ms {
            config.timings.settle_delay_ms = ms;
        }

        Ok(config)
    }
}
