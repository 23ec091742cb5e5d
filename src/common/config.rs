// src/common/config.rs
//! Environment-backed application configuration

use std::env;

/// Configuration read once at process start.
///
/// The identity-provider settings are required; the rest have local-dev
/// defaults so `cargo run` works against a throwaway database.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Identity provider tenant domain, e.g. `dev-xyz.us.auth0.com`
    pub auth_domain: String,
    pub client_id: String,
    pub client_secret: String,
    /// Audience string the API's access tokens must carry
    pub audience: String,
    /// Public base URL of this application (used for OAuth redirects)
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://chores.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

        Ok(Self {
            database_url,
            auth_domain: required("AUTH_DOMAIN")?,
            client_id: required("AUTH_CLIENT_ID")?,
            client_secret: required("AUTH_CLIENT_SECRET")?,
            audience: required("AUTH_AUDIENCE")?,
            base_url,
            port,
        })
    }

    /// Issuer string the provider puts into its tokens (trailing slash included).
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth_domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.auth_domain)
    }

    pub fn redirect_uri(&self) -> String {
        format!("{}/callback", self.base_url)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
