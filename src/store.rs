pub mod search;

use crate::backend::{
    errors::BackendError,
    structs::{Post, PostId},
    Backend,
};
use crate::metrics;
use crate::twoface::{Cause, DescribeErr, ExternalError, Fallible, TfError};
use anyhow::anyhow;
use chrono::{DateTime, Local, TimeZone};
use search::{filter_posts, FilteredView};
use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tracing::{error, info};

/// The local copy of the blog's posts, kept in step with the backend.
///
/// The collection is filled once by `load`, then only changed by successful `create` and `delete`
/// calls. A failed call leaves it exactly as it was.
pub struct PostStore<B> {
    backend: B,
    posts: Vec<Post>,
}

impl<B: Backend> PostStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            posts: Vec::new(),
        }
    }

    /// Posts in backend arrival order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Replace the local posts with the backend's.
    pub async fn load(&mut self) -> Fallible<()> {
        let backend = &self.backend;
        let result = observe("load", || backend.list_posts()).await;
        match result {
            Ok(posts) => {
                info!(count = posts.len(), "loaded posts");
                self.posts = posts;
                Ok(())
            }
            Err(err) => Err(log_failure("load", err)),
        }
    }

    pub fn filter(&self, query: &str) -> FilteredView<'_> {
        filter_posts(&self.posts, query)
    }

    /// One more than the largest id held, or 1 for an empty store.
    pub fn next_id(&self) -> Fallible<PostId> {
        guard!(let Some(max) = self.posts.iter().map(|p| p.id).max() else {
            return Ok(1);
        });
        max.checked_add(1)
            .ok_or_else(|| anyhow!("no post id after {}", max))
            .describe_err(ExternalError {
                cause: Cause::ServerError,
                text: "The blog has run out of post ids",
            })
    }

    /// Send a new post to the backend, stamped with the current local time.
    pub async fn create(&mut self, title: &str, body: &str) -> Fallible<Post> {
        self.create_at(title, body, Local::now()).await
    }

    /// Like `create`, with an explicit creation time.
    pub async fn create_at<Tz>(
        &mut self,
        title: &str,
        body: &str,
        now: DateTime<Tz>,
    ) -> Fallible<Post>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let id = self.next_id().map_err(|err| log_failure("create", err))?;
        let new_post = Post {
            id,
            title: title.to_owned(),
            datetime: format_datetime(&now),
            body: body.to_owned(),
        };
        let backend = &self.backend;
        let result = observe("create", || backend.create_post(&new_post)).await;
        match result {
            Ok(stored) => {
                info!(id = stored.id, "created post");
                // Keep what the backend stored, which may differ from what we sent.
                self.posts.push(stored.clone());
                Ok(stored)
            }
            Err(err) => Err(log_failure("create", err)),
        }
    }

    /// Delete a post from the backend, then drop every local copy with that id.
    pub async fn delete(&mut self, id: PostId) -> Fallible<()> {
        let backend = &self.backend;
        let result = observe("delete", || backend.delete_post(id)).await;
        match result {
            Ok(()) => {
                info!(id, "deleted post");
                self.posts.retain(|p| p.id != id);
                Ok(())
            }
            Err(err) => Err(log_failure("delete", err)),
        }
    }
}

/// e.g. "March 07, 2024 9:05:03 PM"
pub fn format_datetime<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format("%B %d, %Y %-I:%M:%S %p").to_string()
}

/// Log what went wrong in as much detail as the error has, then hand it back.
fn log_failure(operation: &'static str, err: TfError) -> TfError {
    match BackendError::of(&err) {
        Some(BackendError::Server {
            status,
            body,
            headers,
        }) => error!(
            operation,
            status = *status,
            body = body.as_str(),
            headers = ?headers,
            "backend rejected request"
        ),
        Some(BackendError::Malformed { message, body }) => error!(
            operation,
            body = body.as_str(),
            "unexpected backend payload: {}",
            message
        ),
        _ => error!(operation, "{}", err.internal),
    }
    err
}

/// Execute the closure, then record its operational metrics, e.g. time taken, whether it returned Ok/Err.
async fn observe<F, Fut, R>(name: &'static str, f: F) -> Fallible<R>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Fallible<R>>,
{
    let start = Instant::now();
    let return_val = f().await;
    let duration = start.elapsed();
    metrics::OPERATION_SECS
        .with_label_values(&[name])
        .observe(duration.as_secs_f64());
    metrics::OPERATIONS
        .with_label_values(&[name, variant_name(&return_val)])
        .inc();
    return_val
}

fn variant_name<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "err"
    }
}
