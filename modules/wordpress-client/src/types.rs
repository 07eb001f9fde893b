use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A rich-text field as WordPress delivers it: the rendered HTML string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// One post as returned by `GET /wp-json/wp/v2/posts` with
/// `_fields=id,link,title,excerpt,featured_media`.
///
/// `title` stays a map because WordPress keys rendered variants by name
/// (currently only `rendered`) and we pass it through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: u64,
    pub link: String,
    pub title: HashMap<String, String>,
    pub excerpt: Rendered,
    /// `0` means the post has no featured image.
    #[serde(default)]
    pub featured_media: u64,
}

/// Response of the jwt-auth token endpoint. The plugin also returns
/// user display fields; only the token matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A media item fetched with `_fields=guid.rendered`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub guid: Option<Rendered>,
}
