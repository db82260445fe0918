use crate::adapters::{HttpFetcher, PageDisplay};
use crate::core::fan_in::{self, FanInInput};
use crate::core::promise::Promise;
use crate::core::service::PostService;
use crate::core::store::PostStore;
use crate::domain::model::{Post, Timings};
use crate::domain::ports::{ConfigProvider, DisplaySurface, JsonFetcher};
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

pub fn new_post_three() -> Post {
    Post::new("Post Three", "This is post three")
}

/// Write, then read from the completion callback.
pub fn callback_scenario<D: DisplaySurface + 'static>(service: &PostService<D>) -> JoinHandle<()> {
    let reader = service.clone();
    service.create_post_with_callback(new_post_three(), move || {
        reader.get_posts();
    })
}

/// Write, then read as the fulfillment handler; rejections are logged.
pub fn promise_chain_scenario<D: DisplaySurface + 'static>(service: &PostService<D>) -> Promise<()> {
    let reader = service.clone();
    service
        .create_post_promise(new_post_three())
        .then(move |()| {
            reader.get_posts();
        })
        .catch(|err| {
            tracing::error!("❌ {}", err);
        })
}

pub async fn await_scenario<D: DisplaySurface + 'static>(service: &PostService<D>) -> Result<()> {
    service.create_post(new_post_three()).await?;
    service.get_posts();
    Ok(())
}

pub async fn fetch_users(fetcher: &dyn JsonFetcher, url: &str) -> Result<Value> {
    let users = fetcher.fetch_json(url).await?;
    tracing::info!("👥 Fetched users: {}", users);
    Ok(users)
}

/// Fan-in over an already fulfilled value, a plain value, a delayed value
/// and a fetch.
pub async fn fan_in_scenario(
    fetcher: Arc<dyn JsonFetcher>,
    url: &str,
    settle_delay: Duration,
) -> Result<Vec<Value>> {
    let url = url.to_string();
    let users = Promise::spawn(async move { fetcher.fetch_json(&url).await });

    let values = fan_in::all([
        FanInInput::from(Promise::resolve(json!("Hello World"))),
        FanInInput::from(json!(10)),
        FanInInput::from(Promise::delayed(settle_delay, json!("Goodbye"))),
        FanInInput::from(users),
    ])
    .await?;

    tracing::info!("📦 Fan-in settled with {} values", values.len());
    Ok(values)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Callback,
    Promise,
    Await,
    Fetch,
    FanIn,
    All,
}

impl Scenario {
    pub const EACH: [Scenario; 5] = [
        Scenario::Callback,
        Scenario::Promise,
        Scenario::Await,
        Scenario::Fetch,
        Scenario::FanIn,
    ];

    pub fn expand(self) -> Vec<Scenario> {
        match self {
            Scenario::All => Self::EACH.to_vec(),
            single => vec![single],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    Rendered(String),
    Fetched(Value),
    Settled(Vec<Value>),
}

/// Result of one scenario. A failed scenario does not affect the others.
#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: Result<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

// Slack on top of the read delay before a missing render counts as a failure.
const RENDER_GRACE: Duration = Duration::from_secs(1);

/// Runs scenarios. Each post scenario gets its own freshly seeded store and
/// page, so runs never see each other's writes.
pub struct Driver {
    timings: Timings,
    users_endpoint: String,
    fetcher: Arc<dyn JsonFetcher>,
}

impl Driver {
    pub fn new(timings: Timings, users_endpoint: String, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            timings,
            users_endpoint,
            fetcher,
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(
            Timings::from_config(config),
            config.users_endpoint().to_string(),
            Arc::new(HttpFetcher::new()),
        )
    }

    /// Runs the selected scenarios concurrently; reports keep selection order
    /// and carry one result each.
    pub async fn run(&self, scenario: Scenario) -> Vec<ScenarioReport> {
        let runs = scenario.expand().into_iter().map(|s| async move {
            tracing::info!("▶️ Running {:?} scenario", s);
            let outcome = self.run_one(s).await;
            match &outcome {
                Ok(_) => tracing::info!("✅ {:?} scenario finished", s),
                Err(e) => tracing::error!("❌ {:?} scenario failed: {}", s, e),
            }
            ScenarioReport {
                scenario: s,
                outcome,
            }
        });
        futures::future::join_all(runs).await
    }

    async fn run_one(&self, scenario: Scenario) -> Result<ScenarioOutcome> {
        let outcome = match scenario {
            Scenario::Callback => {
                let service = self.fresh_service();
                callback_scenario(&service).await?;
                ScenarioOutcome::Rendered(self.await_render(&service).await?)
            }
            Scenario::Promise => {
                let service = self.fresh_service();
                promise_chain_scenario(&service).await?;
                ScenarioOutcome::Rendered(self.await_render(&service).await?)
            }
            Scenario::Await => {
                let service = self.fresh_service();
                await_scenario(&service).await?;
                ScenarioOutcome::Rendered(self.await_render(&service).await?)
            }
            Scenario::Fetch => ScenarioOutcome::Fetched(
                fetch_users(self.fetcher.as_ref(), &self.users_endpoint).await?,
            ),
            Scenario::FanIn => ScenarioOutcome::Settled(
                fan_in_scenario(
                    Arc::clone(&self.fetcher),
                    &self.users_endpoint,
                    self.timings.settle_delay,
                )
                .await?,
            ),
            Scenario::All => {
                return Err(DemoError::ConfigError {
                    message: "'all' must be expanded before running".to_string(),
                })
            }
        };
        Ok(outcome)
    }

    /// Waits for the read scheduled by a finished write. A write that failed
    /// never schedules one, which surfaces here as [`DemoError::RenderTimeout`].
    async fn await_render(&self, service: &PostService<PageDisplay>) -> Result<String> {
        let limit = self.timings.read_delay + RENDER_GRACE;
        tokio::time::timeout(limit, service.display().wait_for_renders(1))
            .await
            .map_err(|_| DemoError::RenderTimeout {
                waited_ms: limit.as_millis(),
            })
    }

    fn fresh_service(&self) -> PostService<PageDisplay> {
        PostService::new(
            Arc::new(PostStore::seeded()),
            Arc::new(PageDisplay::new()),
            self.timings,
        )
    }
}
