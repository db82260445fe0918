use crate::core::promise::Promise;
use crate::core::store::PostStore;
use crate::domain::model::{render_post_list, Post, Timings};
use crate::domain::ports::DisplaySurface;
use crate::utils::error::{DemoError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

// Stand-in for a real success check on the write. Always false.
const WRITE_FAILED: bool = false;

/// Delayed reads and writes over a shared [`PostStore`].
///
/// The write is one asynchronous operation, [`PostService::create_post`].
/// The callback and promise methods wrap it for the other call styles.
pub struct PostService<D: DisplaySurface> {
    store: Arc<PostStore>,
    display: Arc<D>,
    timings: Timings,
}

impl<D: DisplaySurface> Clone for PostService<D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            display: Arc::clone(&self.display),
            timings: self.timings,
        }
    }
}

impl<D: DisplaySurface + 'static> PostService<D> {
    pub fn new(store: Arc<PostStore>, display: Arc<D>, timings: Timings) -> Self {
        Self {
            store,
            display,
            timings,
        }
    }

    pub fn store(&self) -> &Arc<PostStore> {
        &self.store
    }

    pub fn display(&self) -> &Arc<D> {
        &self.display
    }

    /// Waits out the read delay, then renders whatever the store holds at
    /// that moment.
    pub async fn read_posts(&self) {
        tokio::time::sleep(self.timings.read_delay).await;

        let posts = self.store.snapshot();
        tracing::debug!("Rendering {} posts", posts.len());
        self.display.render(&render_post_list(&posts));
    }

    /// Schedules [`PostService::read_posts`] and returns immediately.
    pub fn get_posts(&self) -> JoinHandle<()> {
        tracing::debug!("Scheduling post read in {:?}", self.timings.read_delay);
        let service = self.clone();
        tokio::spawn(async move { service.read_posts().await })
    }

    pub async fn create_post(&self, post: Post) -> Result<()> {
        tokio::time::sleep(self.timings.write_delay).await;

        tracing::debug!("Appending post '{}'", post.title);
        self.store.append(post);

        if WRITE_FAILED {
            return Err(DemoError::write_failure());
        }
        Ok(())
    }

    /// Starts the write now; the promise fulfills after the append.
    pub fn create_post_promise(&self, post: Post) -> Promise<()> {
        tracing::debug!("Scheduling post write in {:?}", self.timings.write_delay);
        let service = self.clone();
        Promise::spawn(async move { service.create_post(post).await })
    }

    /// Starts the write now and calls `callback` once, after the append.
    ///
    /// There is no error channel. A failed write is logged and the callback
    /// is not called.
    pub fn create_post_with_callback<F>(&self, post: Post, callback: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::debug!("Scheduling post write in {:?}", self.timings.write_delay);
        let service = self.clone();
        tokio::spawn(async move {
            match service.create_post(post).await {
                Ok(()) => callback(),
                Err(e) => tracing::error!("❌ Post write failed: {}", e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::display::PageDisplay;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const ALL_THREE: &str = "<li>Post One</li><li>Post Two</li><li>Post Three</li>";

    fn service() -> PostService<PageDisplay> {
        PostService::new(
            Arc::new(PostStore::seeded()),
            Arc::new(PageDisplay::new()),
            Timings::default(),
        )
    }

    fn post_three() -> Post {
        Post::new("Post Three", "This is post three")
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_renders_after_delay() {
        let service = service();
        service.get_posts();

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(service.display().render_count(), 0);

        let html = service.display().wait_for_renders(1).await;
        assert_eq!(html, "<li>Post One</li><li>Post Two</li>");
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_replaces_previous_render() {
        let service = service();
        service.read_posts().await;
        service.store().append(post_three());
        service.read_posts().await;

        assert_eq!(service.display().render_count(), 2);
        assert_eq!(service.display().current(), ALL_THREE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_await_style_appends_before_returning() {
        let service = service();
        let start = tokio::time::Instant::now();

        service.create_post(post_three()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(service.store().len(), 3);

        service.read_posts().await;
        assert_eq!(service.display().current(), ALL_THREE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_promise_fulfills_after_append() {
        let service = service();
        let store = Arc::clone(service.store());

        let seen = service
            .create_post_promise(post_three())
            .then(move |()| store.len())
            .await
            .unwrap();

        assert_eq!(seen, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_promise_settles_only_after_write_delay() {
        let service = service();
        let promise = service.create_post_promise(post_three());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!promise.is_settled());
        assert_eq!(service.store().len(), 2);

        promise.await.unwrap();
        assert_eq!(service.store().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_invoked_once_after_append() {
        let service = service();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen_len = Arc::new(AtomicUsize::new(0));

        let handle = {
            let calls = Arc::clone(&calls);
            let seen_len = Arc::clone(&seen_len);
            let store = Arc::clone(service.store());
            service.create_post_with_callback(post_three(), move || {
                calls.fetch_add(1, Ordering::SeqCst);
                seen_len.store(store.len(), Ordering::SeqCst);
            })
        };

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(seen_len.load(Ordering::SeqCst), 3);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_started_alongside_write_misses_new_post() {
        let service = service();

        let write = service.create_post_promise(post_three());
        service.get_posts();

        let html = service.display().wait_for_renders(1).await;
        assert_eq!(html, "<li>Post One</li><li>Post Two</li>");

        write.await.unwrap();
        assert_eq!(service.store().len(), 3);
    }
}
