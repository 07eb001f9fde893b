use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::jwt::AuthBearer;
use crate::posts::{self, Post, DEFAULT_PAGE_SIZE};
use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Blog API is up" }))
}

/// Exchange the configured WordPress credentials for a JWT the frontend
/// can present to /posts.
pub async fn auth(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let token = state
        .wp
        .obtain_token(&state.config.wp_login, &state.config.wp_password)
        .await
        .map_err(ApiError::TokenAcquisitionFailed)?;
    Ok(Json(json!({ "token": token })))
}

/// The aggregated post list, newest first as WordPress returns them.
pub async fn get_posts(
    State(state): State<Arc<AppState>>,
    bearer: AuthBearer,
) -> Result<Json<Vec<Post>>, ApiError> {
    tracing::debug!(iss = %bearer.claims.iss, "Bearer token verified");
    let posts = posts::fetch_posts(&state.wp, &bearer.token, DEFAULT_PAGE_SIZE)
        .await
        .map_err(ApiError::UpstreamFetchFailed)?;
    Ok(Json(posts))
}
