use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{Post, PostId},
    protocol::{CommentPayload, PostPayload},
};
use thiserror::Error;

/// Failure surface of the remote store. `NotFound` is kept distinct so the
/// dispatcher can tell a vanished update target apart from transport trouble.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}

/// The external authoritative persistence collaborator. The core never
/// mutates posts locally except through this trait plus a cache reload (or
/// the one sanctioned local patch after a confirmed delete).
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError>;
    async fn create_post(&self, payload: &PostPayload) -> Result<Post, RemoteError>;
    async fn update_post(&self, id: &PostId, payload: &PostPayload) -> Result<Post, RemoteError>;
    async fn delete_post(&self, id: &PostId) -> Result<(), RemoteError>;
    async fn add_comment(&self, id: &PostId, payload: &CommentPayload) -> Result<(), RemoteError>;
}

/// reqwest-backed [`RemoteStore`] speaking the `/blogPosts` HTTP contract.
pub struct HttpRemoteStore {
    http: Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// `base_url` is the API root; the store appends `/blogPosts` itself.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/blogPosts", self.base_url)
    }

    fn post_url(&self, id: &PostId) -> String {
        format!("{}/blogPosts/{}", self.base_url, id)
    }

    fn comments_url(&self, id: &PostId) -> String {
        format!("{}/blogPosts/{}/comments", self.base_url, id)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(RemoteError::NotFound);
    }
    Ok(response.error_for_status()?)
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError> {
        let response = self.http.get(self.collection_url()).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn create_post(&self, payload: &PostPayload) -> Result<Post, RemoteError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update_post(&self, id: &PostId, payload: &PostPayload) -> Result<Post, RemoteError> {
        let response = self
            .http
            .put(self.post_url(id))
            .json(payload)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), RemoteError> {
        let response = self.http.delete(self.post_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }

    async fn add_comment(&self, id: &PostId, payload: &CommentPayload) -> Result<(), RemoteError> {
        // Response body may be the updated post or a bare ack; the client
        // reloads the cache afterwards either way, so only the status matters.
        let response = self
            .http
            .post(self.comments_url(id))
            .json(payload)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}
