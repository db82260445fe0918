use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Something that shows rendered markup. Every call replaces what was there.
pub trait DisplaySurface: Send + Sync {
    fn render(&self, html: &str);
}

#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn users_endpoint(&self) -> &str;
    fn read_delay(&self) -> Duration;
    fn write_delay(&self) -> Duration;
    fn settle_delay(&self) -> Duration;
}
