//! # API crate — REST gateway for the BlogSite backend
//!
//! Every screen in the application talks to the backend through
//! [`ApiClient`]: a thin, stateless wrapper around `reqwest` with one async
//! method per backend endpoint. The backend lives at a fixed base origin
//! ([`DEFAULT_BASE_URL`]) and speaks JSON.
//!
//! | Group | Methods |
//! |-------|---------|
//! | Accounts | [`ApiClient::register`], [`ApiClient::login`] |
//! | Users | [`ApiClient::list_users`], [`ApiClient::create_user`], [`ApiClient::update_user`], [`ApiClient::delete_user`], [`ApiClient::dashboard_stats`] |
//! | Posts | [`ApiClient::list_posts`], [`ApiClient::create_post`], [`ApiClient::update_post`], [`ApiClient::delete_post`] |
//! | Comments | [`ApiClient::comments_for_post`], [`ApiClient::create_comment`] |
//!
//! The client carries no session token: the backend trusts whoever calls it,
//! and the gating in the UI is a convenience, not a security boundary. Wire
//! types live in [`models`].

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod models;

pub use models::{
    Comment, Credentials, DashboardStats, NewComment, Post, PostPayload, User, UserPayload,
};
pub use session::{Identity, Role};

/// Base origin of the backend REST service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// Stateless request/response client for the backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Process-wide client against the fixed backend origin.
pub fn api() -> &'static ApiClient {
    static SHARED: OnceLock<ApiClient> = OnceLock::new();
    SHARED.get_or_init(ApiClient::default)
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Parse an API response, mapping HTTP errors to `ApiError`.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body,
            });
        }
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// Check the status of a response whose body we do not care about.
    async fn expect_success(resp: reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(())
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::parse(resp).await
    }

    async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::parse(resp).await
    }

    // ── Accounts ────────────────────────────────────────────────────

    /// Register a new account. The backend answers with the created identity,
    /// which callers typically log in with immediately.
    pub async fn register(&self, payload: &UserPayload) -> Result<Identity, ApiError> {
        self.post_json("api/users", payload).await
    }

    /// Authenticate with username and password.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        self.post_json("api/users/login", credentials).await
    }

    // ── Users ───────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("api/users").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.post_json("api/users", payload).await
    }

    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("api/users/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("api/users/{}", id)))
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    /// Aggregate counts for the admin dashboard.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("api/users/dashboard/stats").await
    }

    // ── Posts ───────────────────────────────────────────────────────

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("api/posts").await
    }

    pub async fn create_post(&self, payload: &PostPayload) -> Result<Post, ApiError> {
        self.post_json("api/posts", payload).await
    }

    pub async fn update_post(&self, id: i64, payload: &PostPayload) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("api/posts/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("api/posts/{}", id)))
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    // ── Comments ────────────────────────────────────────────────────

    /// All comments attached to one post, in creation order.
    pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("api/comments/post/{}", post_id)).await
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json("api/comments", comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_cleanly() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("api/posts"), "http://localhost:8080/api/posts");
        assert_eq!(client.url("/api/posts"), "http://localhost:8080/api/posts");
        assert_eq!(
            client.url("api/comments/post/3"),
            "http://localhost:8080/api/comments/post/3"
        );
    }
}
