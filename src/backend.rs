#[cfg(test)]
pub mod mock;
pub mod errors;
pub mod rest;
pub mod structs;

use crate::backend::structs::{Post, PostId};
use crate::twoface::Fallible;
use async_trait::async_trait;

#[async_trait(?Send)]
/// The remote posts collection. Calls resolve on the single-threaded actix runtime, so their
/// futures don't need to be `Send`.
pub trait Backend {
    /// Every post, in the order the backend stores them.
    async fn list_posts(&self) -> Fallible<Vec<Post>>;
    /// Store a post and return the backend's representation of it.
    async fn create_post(&self, post: &Post) -> Fallible<Post>;
    async fn delete_post(&self, id: PostId) -> Fallible<()>;
}
