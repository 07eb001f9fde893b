use std::sync::Arc;

use anyhow::Result;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// Claims carried by a WordPress jwt-auth token. The plugin also sets
/// `nbf` and a `data.user.id` payload; we only need what validation uses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(default)]
    pub iss: String,
}

/// Verifies bearer tokens against the jwt-auth plugin's shared secret.
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Verify signature and expiry (HS256). Returns claims if valid.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

/// Authenticated caller. Extract this in handlers that require auth.
/// Keeps the raw token around because the upstream fetch reuses it.
pub struct AuthBearer {
    pub token: String,
    pub claims: Claims,
}

impl FromRequestParts<Arc<AppState>> for AuthBearer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::InvalidToken("missing bearer token".to_string()))?;

        let claims = state
            .jwt
            .verify_token(token)
            .map_err(|e| ApiError::InvalidToken(e.to_string()))?;

        Ok(AuthBearer {
            token: token.to_string(),
            claims,
        })
    }
}
