use serde::{Deserialize, Serialize};

pub type PostId = i64;

/// A blog post, as the backend stores it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub datetime: String,
    pub body: String,
}

impl Post {
    /// Does the title or body contain `needle`? `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}
