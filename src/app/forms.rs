use crate::backend::structs::Post;

/// Title and body text being typed into one form. Each form owns its own.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
}

impl PostForm {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn filled_from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.body.clone())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}
