use crate::domain::model::{seed_posts, Post};
use std::sync::{Mutex, MutexGuard};

/// Append-only, insertion-ordered list of posts shared by the read and write
/// operations.
///
/// Tasks may run on several worker threads, so appends and snapshots go
/// through a mutex: a snapshot always sees whole appends.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Mutex<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            posts: Mutex::new(seed_posts()),
        }
    }

    pub fn append(&self, post: Post) {
        self.lock().push(post);
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A push cannot leave the vector half-written, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Post>> {
        self.posts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
