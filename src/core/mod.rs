pub mod fan_in;
pub mod promise;
pub mod scenarios;
pub mod service;
pub mod store;

pub use crate::domain::model::{Post, Timings};
pub use crate::domain::ports::{ConfigProvider, DisplaySurface, JsonFetcher};
pub use crate::utils::error::Result;
