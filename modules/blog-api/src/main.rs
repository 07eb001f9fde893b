use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordpress_client::WordPressClient;

mod config;
mod error;
mod jwt;
mod posts;
mod rest;
mod sanitize;

use config::Config;
use jwt::JwtService;

/// Read-only per-process state: config, token verifier and the pooled
/// upstream client. Requests share nothing mutable.
pub struct AppState {
    pub config: Config,
    pub jwt: JwtService,
    pub wp: WordPressClient,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(rest::root))
        .route("/auth", post(rest::auth))
        .route("/posts", get(rest::get_posts))
        .with_state(state)
        // CORS: the blog frontend is served from another origin
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("blog_api=info".parse()?))
        .init();

    let config = Config::from_env();
    let jwt = JwtService::new(&config.jwt_secret);
    let wp = WordPressClient::new(config.wp_url.clone());

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState { config, jwt, wp });

    info!("Blog API starting on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
