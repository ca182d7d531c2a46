use crate::backend::{
    errors::{into_tf, BackendError},
    structs::{Post, PostId},
    Backend,
};
use crate::config::Config;
use crate::twoface::{Fallible, TfError};
use anyhow::anyhow;
use async_trait::async_trait;
use awc::{error::PayloadError, Client, ClientResponse};
use bytes::Bytes;
use futures::Stream;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// An implementation of backend::Backend that talks JSON over HTTP to `<base>/posts`.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    posts_url: Url,
    max_body_size: usize,
}

impl RestBackend {
    pub fn new(
        base_url: &Url,
        max_body_size: usize,
        timeout: Option<Duration>,
    ) -> Result<Self, anyhow::Error> {
        let builder = Client::builder();
        let client = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder.disable_timeout(),
        }
        .finish();
        Ok(Self {
            client,
            posts_url: with_segment(base_url, "posts")?,
            max_body_size,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        Self::new(
            &config.backend_url,
            config.max_body_size,
            config.request_timeout(),
        )
    }

    fn post_url(&self, id: PostId) -> Fallible<Url> {
        Ok(with_segment(&self.posts_url, &id.to_string())?)
    }
}

#[async_trait(?Send)]
impl Backend for RestBackend {
    async fn list_posts(&self) -> Fallible<Vec<Post>> {
        debug!(url = self.posts_url.as_str(), "GET");
        let response = self
            .client
            .get(self.posts_url.as_str())
            .send()
            .await
            .map_err(transport)?;
        let body = receive(response, self.max_body_size).await?;
        decode(&body)
    }

    async fn create_post(&self, post: &Post) -> Fallible<Post> {
        debug!(url = self.posts_url.as_str(), id = post.id, "POST");
        let response = self
            .client
            .post(self.posts_url.as_str())
            .send_json(post)
            .await
            .map_err(transport)?;
        let body = receive(response, self.max_body_size).await?;
        decode(&body)
    }

    async fn delete_post(&self, id: PostId) -> Fallible<()> {
        let url = self.post_url(id)?;
        debug!(url = url.as_str(), "DELETE");
        let response = self
            .client
            .delete(url.as_str())
            .send()
            .await
            .map_err(transport)?;
        // The post is gone once the backend says so; whatever body came with that is irrelevant.
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejected(response, self.max_body_size).await)
        }
    }
}

/// Append one path segment to `base`, so `http://host/api` becomes `http://host/api/posts`.
fn with_segment(base: &Url, segment: &str) -> Result<Url, anyhow::Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("{} can't be used as a base URL", base))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

fn transport<E: std::fmt::Display>(err: E) -> TfError {
    into_tf(BackendError::Transport {
        message: err.to_string(),
    })
}

/// Read a 2xx response's body. Anything else becomes BackendError::Server.
async fn receive<S>(mut response: ClientResponse<S>, limit: usize) -> Fallible<Bytes>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin,
{
    if !response.status().is_success() {
        return Err(rejected(response, limit).await);
    }
    response.body().limit(limit).await.map_err(|e| {
        into_tf(BackendError::Malformed {
            message: e.to_string(),
            body: String::new(),
        })
    })
}

/// A non-2xx response as a BackendError::Server. Status and headers are always kept; a body that
/// can't be read under `limit` is replaced by a note saying why.
async fn rejected<S>(mut response: ClientResponse<S>, limit: usize) -> TfError
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin,
{
    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = match response.body().limit(limit).await {
        Ok(body) => String::from_utf8_lossy(&body).into_owned(),
        Err(e) => format!("<unreadable body: {}>", e),
    };
    into_tf(BackendError::Server {
        status: status.as_u16(),
        body,
        headers,
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Fallible<T> {
    serde_json::from_slice(body).map_err(|e| {
        into_tf(BackendError::Malformed {
            message: e.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        })
    })
}
