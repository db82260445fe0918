use crate::domain::ports::DisplaySurface;
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
struct Page {
    html: String,
    renders: usize,
}

/// In-memory page body. Each render replaces the content, and waiters can
/// block until a given number of renders has happened.
#[derive(Debug)]
pub struct PageDisplay {
    page: watch::Sender<Page>,
}

impl PageDisplay {
    pub fn new() -> Self {
        let (page, _) = watch::channel(Page::default());
        Self { page }
    }

    pub fn current(&self) -> String {
        self.page.borrow().html.clone()
    }

    pub fn render_count(&self) -> usize {
        self.page.borrow().renders
    }

    /// Resolves with the page content once at least `count` renders have
    /// happened.
    pub async fn wait_for_renders(&self, count: usize) -> String {
        let mut rx = self.page.subscribe();
        let html = match rx.wait_for(|page| page.renders >= count).await {
            Ok(page) => page.html.clone(),
            // The sender lives in `self`; the channel cannot close here.
            Err(_) => self.current(),
        };
        html
    }
}

impl Default for PageDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for PageDisplay {
    fn render(&self, html: &str) {
        self.page.send_modify(|page| {
            page.html = html.to_string();
            page.renders += 1;
        });
    }
}
