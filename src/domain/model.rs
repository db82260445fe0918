use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_READ_DELAY_MS: u64 = 1000;
pub const DEFAULT_WRITE_DELAY_MS: u64 = 2000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The two posts every store starts with.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new("Post One", "This is post one"),
        Post::new("Post Two", "This is post two"),
    ]
}

/// Renders each title as a list item, in order.
pub fn render_post_list(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|post| format!("<li>{}</li>", post.title))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub read_delay: Duration,
    pub write_delay: Duration,
    /// Delay of the deferred value in the fan-in scenario.
    pub settle_delay: Duration,
}

impl Timings {
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self {
            read_delay: config.read_delay(),
            write_delay: config.write_delay(),
            settle_delay: config.settle_delay(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            read_delay: Duration::from_millis(DEFAULT_READ_DELAY_MS),
            write_delay: Duration::from_millis(DEFAULT_WRITE_DELAY_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}
