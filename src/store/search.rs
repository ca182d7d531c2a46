//! Client-side search over the cached posts.
use crate::backend::structs::Post;

/// The posts matching a search, most recent first. Always derived from the store, never edited.
pub type FilteredView<'a> = Vec<&'a Post>;

/// Keep the posts whose title or body contains `query`, ignoring case, newest first.
/// An empty query matches every post.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> FilteredView<'a> {
    let needle = query.to_lowercase();
    posts.iter().rev().filter(|p| p.mentions(&needle)).collect()
}
