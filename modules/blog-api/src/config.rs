use std::env;

/// Application configuration loaded from environment variables.
/// Read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    // WordPress upstream
    pub wp_url: String,
    pub wp_login: String,
    pub wp_password: String,

    /// Shared secret of the WordPress jwt-auth plugin, used to verify
    /// bearer tokens presented to /posts.
    pub jwt_secret: String,

    // Web server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            wp_url: required_env("WP_URL"),
            wp_login: required_env("WP_LOGIN"),
            wp_password: required_env("WP_PASSWORD"),
            jwt_secret: required_env("WP_JWT_SECRET_KEY"),
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("API_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
