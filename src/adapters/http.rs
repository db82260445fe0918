use crate::domain::ports::JsonFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        let data = response.error_for_status()?.json().await?;
        Ok(data)
    }
}
