use crate::core::promise::Promise;
use crate::utils::error::Result;
use futures::future::{self, BoxFuture, FutureExt};
use serde_json::Value;
use std::future::{Future, IntoFuture};

/// One input to [`all`]: either a plain value or something still pending.
pub enum FanInInput {
    Value(Value),
    Pending(BoxFuture<'static, Result<Value>>),
}

impl FanInInput {
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        FanInInput::Pending(future.boxed())
    }
}

impl From<Value> for FanInInput {
    fn from(value: Value) -> Self {
        FanInInput::Value(value)
    }
}

impl From<Promise<Value>> for FanInInput {
    fn from(promise: Promise<Value>) -> Self {
        FanInInput::pending(promise)
    }
}

impl IntoFuture for FanInInput {
    type Output = Result<Value>;
    type IntoFuture = BoxFuture<'static, Result<Value>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            FanInInput::Value(value) => future::ok(value).boxed(),
            FanInInput::Pending(pending) => pending,
        }
    }
}

/// Waits for every input and yields their values in input order.
///
/// The first rejection wins: its error is returned right away and the
/// remaining inputs are no longer awaited.
pub async fn all<I>(inputs: I) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = FanInInput>,
{
    let pending: Vec<_> = inputs.into_iter().map(IntoFuture::into_future).collect();
    tracing::debug!("Waiting on {} inputs", pending.len());
    future::try_join_all(pending).await
}
