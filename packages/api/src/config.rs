//! Runtime configuration for the remote store.
//!
//! Base URL and anon key are read from `CARCONNECT_SUPABASE_URL` /
//! `CARCONNECT_SUPABASE_ANON_KEY` (via `dotenvy`), each falling back to the
//! literal constants the original app hard-codes. There is no config file.

/// Literal fallback base URL used when the environment does not override it.
const DEFAULT_BASE_URL: &str = "http://localhost:54321";

/// Literal fallback anon key used when the environment does not override it.
const DEFAULT_ANON_KEY: &str = "public-anon-key";

/// Base URL and anon key for the hosted REST + auth backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Project anon key sent as the `apikey` header.
    pub anon_key: String,
}

impl Config {
    /// Read configuration from the environment, falling back to the literal
    /// defaults. `dotenvy` is consulted first so a local `.env` wins.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("CARCONNECT_SUPABASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let anon_key = std::env::var("CARCONNECT_SUPABASE_ANON_KEY")
            .unwrap_or_else(|_| DEFAULT_ANON_KEY.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    /// URL for a REST table: `{base}/rest/v1/{table}`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// URL for an auth endpoint: `{base}/auth/v1/{path}`.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }
}
