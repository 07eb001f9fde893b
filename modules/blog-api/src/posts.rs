use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use wordpress_client::{RawPost, Result, WordPressClient, WordPressError};

use crate::sanitize::clean_html;

/// How many posts one /posts call republishes.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// The public post shape. `excerpt` is plain single-line text;
/// `featured_media` is present exactly when resolution succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u64,
    pub link: Url,
    pub title: HashMap<String, String>,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<Url>,
}

/// Resolve a featured-media id to its source URL. Any failure degrades to
/// `None`: a missing image must not sink the whole batch.
async fn resolve_media(wp: &WordPressClient, media_id: u64, token: &str) -> Option<Url> {
    match wp.media_source_url(media_id, token).await {
        Ok(raw) => match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(media_id, error = %e, "Media item has an unparseable source URL");
                None
            }
        },
        Err(e) => {
            tracing::warn!(media_id, error = %e, "Could not resolve featured media");
            None
        }
    }
}

/// Shape one raw post for the public API. Only a structurally broken
/// record (an invalid `link`) can fail; media trouble never does.
async fn normalize(wp: &WordPressClient, token: &str, raw: RawPost) -> Result<Post> {
    let link = Url::parse(&raw.link)
        .map_err(|e| WordPressError::Parse(format!("post {} has invalid link: {e}", raw.id)))?;

    let featured_media = if raw.featured_media != 0 {
        resolve_media(wp, raw.featured_media, token).await
    } else {
        None
    };

    Ok(Post {
        id: raw.id,
        link,
        title: raw.title,
        excerpt: clean_html(&raw.excerpt.rendered),
        featured_media,
    })
}

/// Fetch one page of posts and normalize them. Media lookups for distinct
/// posts run concurrently; the result keeps the upstream listing order and
/// length. Only the listing call itself can fail the batch.
pub async fn fetch_posts(wp: &WordPressClient, token: &str, per_page: u32) -> Result<Vec<Post>> {
    let raw = wp.list_posts(token, per_page).await?;
    futures::future::join_all(raw.into_iter().map(|p| normalize(wp, token, p)))
        .await
        .into_iter()
        .collect()
}
