use crate::utils::error::{DemoError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Eagerly started asynchronous result that settles exactly once.
///
/// The work runs on the tokio runtime as soon as the promise is created,
/// whether or not anyone awaits it. Dropping a promise detaches the work
/// instead of cancelling it. Handlers attached with [`Promise::then`] and
/// [`Promise::catch`] produce new promises, so chains read left to right.
#[must_use = "a promise's outcome is lost unless it is awaited or chained"]
pub struct Promise<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> Promise<T> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub fn resolve(value: T) -> Self {
        Self::spawn(async move { Ok(value) })
    }

    pub fn reject(error: DemoError) -> Self {
        Self::spawn(async move { Err(error) })
    }

    /// Fulfills with `value` once `delay` has elapsed.
    pub fn delayed(delay: Duration, value: T) -> Self {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            Ok(value)
        })
    }

    pub fn then<U, F>(self, on_fulfilled: F) -> Promise<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Promise::spawn(async move { self.await.map(on_fulfilled) })
    }

    /// Like [`Promise::then`], for handlers that are asynchronous themselves.
    pub fn and_then<U, F, Fut>(self, on_fulfilled: F) -> Promise<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U>> + Send + 'static,
    {
        Promise::spawn(async move {
            let value = self.await?;
            on_fulfilled(value).await
        })
    }

    pub fn catch<F>(self, on_rejected: F) -> Promise<T>
    where
        F: FnOnce(DemoError) -> T + Send + 'static,
    {
        Promise::spawn(async move {
            match self.await {
                Ok(value) => Ok(value),
                Err(e) => Ok(on_rejected(e)),
            }
        })
    }

    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for Promise<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.map_err(DemoError::from).and_then(|settled| settled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_resolve_and_reject() {
        assert_eq!(assert_ok!(Promise::resolve(7).await), 7);

        let err = assert_err!(Promise::<()>::reject(DemoError::write_failure()).await);
        assert_eq!(err.to_string(), "Error: Something went wrong");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_waits_at_least_the_delay() {
        let start = tokio::time::Instant::now();
        let value = Promise::delayed(Duration::from_millis(2000), "Goodbye").await.unwrap();
        assert_eq!(value, "Goodbye");
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_work_starts_without_being_awaited() {
        let ran = Arc::new(AtomicUsize::new(0));
        let promise = {
            let ran = Arc::clone(&ran);
            Promise::spawn(async move {
                ran.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        };
        drop(promise);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_then_runs_only_on_fulfillment() {
        let doubled = Promise::resolve(21).then(|n| n * 2).await.unwrap();
        assert_eq!(doubled, 42);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let result = Promise::<i32>::reject(DemoError::write_failure())
            .then(move |n| {
                counter.fetch_add(1, Ordering::SeqCst);
                n
            })
            .await;
        assert!(result.unwrap_err().is_write_failure());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_catch_recovers_rejection() {
        let message = Promise::reject(DemoError::write_failure())
            .then(|()| "fulfilled".to_string())
            .catch(|err| err.to_string())
            .await
            .unwrap();
        assert_eq!(message, "Error: Something went wrong");
    }

    #[tokio::test]
    async fn test_catch_passes_fulfillment_through() {
        let value = Promise::resolve("ok").catch(|_| "caught").await.unwrap();
        assert_eq!(value, "ok");
    }

    #[tokio::test]
    async fn test_and_then_chains_async_handler() {
        let value = Promise::resolve(1)
            .and_then(|n| async move { Ok(n + 1) })
            .and_then(|n| Promise::resolve(n * 10))
            .await
            .unwrap();
        assert_eq!(value, 20);
    }

    #[tokio::test]
    async fn test_panicking_work_settles_as_task_error() {
        let result = Promise::<()>::spawn(async {
            if true {
                panic!("boom");
            }
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(DemoError::TaskError(_))));
    }
}
