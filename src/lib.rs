pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpFetcher, PageDisplay};
pub use config::DemoConfig;
pub use crate::core::{
    promise::Promise,
    scenarios::{Driver, Scenario, ScenarioOutcome, ScenarioReport},
    service::PostService,
    store::PostStore,
};
pub use domain::model::{Post, Timings};
pub use utils::error::{DemoError, Result};
