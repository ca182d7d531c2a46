use crate::backend::{
    errors::{into_tf, BackendError},
    structs::{Post, PostId},
};
use crate::twoface::Fallible;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Store<T> = Arc<Mutex<Vec<T>>>;

/// A mock implementation of backend::Backend, with a switch to make every call fail.
#[derive(Clone, Default, Debug)]
pub struct Backend {
    posts: Store<Post>,
    /// Every call made, e.g. "GET /posts" or "DELETE /posts/3".
    calls: Store<String>,
    fail_with: Arc<Mutex<Option<BackendError>>>,
}

impl Backend {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(Mutex::new(posts)),
            ..Default::default()
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    pub fn fail_with(&self, err: BackendError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Fallible<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(into_tf(err)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl super::Backend for Backend {
    async fn list_posts(&self) -> Fallible<Vec<Post>> {
        self.record("GET /posts".to_owned())?;
        Ok(self.posts())
    }

    async fn create_post(&self, post: &Post) -> Fallible<Post> {
        self.record("POST /posts".to_owned())?;
        // Trim whitespace so callers can tell the stored copy from the one they sent.
        let stored = Post {
            title: post.title.trim().to_owned(),
            body: post.body.trim().to_owned(),
            ..post.clone()
        };
        self.posts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete_post(&self, id: PostId) -> Fallible<()> {
        self.record(format!("DELETE /posts/{}", id))?;
        let mut posts = self.posts.lock().unwrap();
        guard!(let Some(index) = posts.iter().position(|p| p.id == id) else {
            return Err(into_tf(BackendError::Server {
                status: 404,
                body: "{}".to_owned(),
                headers: vec![],
            }));
        });
        posts.remove(index);
        Ok(())
    }
}
