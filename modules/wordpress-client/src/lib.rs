pub mod error;
pub mod types;

pub use error::{Result, WordPressError};
pub use types::{MediaItem, RawPost, Rendered, TokenResponse};

use std::time::Duration;

use serde_json::json;

/// Fields requested from the posts listing; everything else is dead weight
/// for the aggregation pipeline.
const POST_FIELDS: &str = "id,link,title,excerpt,featured_media";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the WordPress REST API plus the jwt-auth token endpoint.
/// Holds one pooled `reqwest::Client`; no request state is shared between
/// calls, so a single instance serves the whole process.
pub struct WordPressClient {
    client: reqwest::Client,
    base_url: String,
}

impl WordPressClient {
    /// # Panics
    ///
    /// Panics if the TLS backend fails to initialize.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap(),
            base_url: base_url.into(),
        }
    }

    /// Exchange WordPress credentials for a JWT via the jwt-auth plugin.
    /// One POST, no retries.
    pub async fn obtain_token(&self, username: &str, password: &str) -> Result<String> {
        tracing::info!("Requesting JWT token from WordPress");

        let url = format!("{}/wp-json/jwt-auth/v1/token", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WordPressError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.token)
    }

    /// Fetch one page of posts, trimmed to the fields the pipeline needs.
    pub async fn list_posts(&self, token: &str, per_page: u32) -> Result<Vec<RawPost>> {
        tracing::info!(per_page, "Fetching posts from WordPress");

        let url = format!("{}/wp-json/wp/v2/posts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("per_page", per_page.to_string().as_str()),
                ("_fields", POST_FIELDS),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WordPressError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let posts: Vec<RawPost> = serde_json::from_str(&body)?;
        tracing::info!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    /// Look up the source URL (`guid.rendered`) of one media item.
    pub async fn media_source_url(&self, media_id: u64, token: &str) -> Result<String> {
        tracing::debug!(media_id, "Fetching media item from WordPress");

        let url = format!("{}/wp-json/wp/v2/media/{}", self.base_url, media_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("_fields", "guid.rendered")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WordPressError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let media: MediaItem = serde_json::from_str(&body)?;
        media
            .guid
            .map(|g| g.rendered)
            .ok_or_else(|| WordPressError::Parse(format!("media {media_id} has no guid.rendered")))
    }
}
