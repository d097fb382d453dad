//! HTTP client for the hosted REST + auth backend.
//!
//! All network traffic in the app goes through [`Client`]. Every request
//! carries the project `apikey` header and a bearer token: the session's
//! access token when someone is signed in, the anon key otherwise. Non-2xx
//! responses are normalized into [`ApiError::Remote`] with the server's
//! message text before they reach any caller.
//!
//! The session lives here and nowhere else. It is set by [`Client::sign_in`]
//! and [`Client::sign_up`], cleared by [`Client::sign_out`], and dropped on
//! exit; nothing is persisted across runs.

use std::sync::OnceLock;

use reqwest::{header, Response, StatusCode};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{extract_message, ApiError};
use crate::models::{AuthUser, NewProfile, Profile, Session};

/// Table holding registered profiles.
pub const PROFILES_TABLE: &str = "profiles";

static CLIENT: OnceLock<Client> = OnceLock::new();

/// Process-wide client, configured from the environment on first use.
pub fn client() -> &'static Client {
    CLIENT.get_or_init(|| Client::new(Config::from_env()))
}

pub struct Client {
    http: reqwest::Client,
    config: Config,
    session: RwLock<Option<Session>>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    /// The current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<AuthUser> {
        self.session.read().await.as_ref().map(|s| s.user.clone())
    }

    /// Fetch every row of a table: `GET {base}/rest/v1/{table}?select=*`.
    pub async fn list(&self, table: &str) -> Result<Vec<Profile>, ApiError> {
        let url = format!("{}?select=*", self.config.rest_url(table));
        let response = self
            .http
            .get(&url)
            .headers(self.headers().await)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Convenience wrapper for the app's own table.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.list(PROFILES_TABLE).await
    }

    /// Insert a row and return the server-echoed record
    /// (`Prefer: return=representation`).
    pub async fn create(&self, table: &str, record: &NewProfile) -> Result<Profile, ApiError> {
        let response = self
            .http
            .post(self.config.rest_url(table))
            .headers(self.headers().await)
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await?;
        let response = Self::check(response).await?;
        // PostgREST echoes inserts back as a one-element array.
        let mut rows: Vec<Profile> = response.json().await?;
        rows.pop().ok_or(ApiError::Remote {
            status: StatusCode::OK.as_u16(),
            message: "insert returned no representation".to_string(),
        })
    }

    pub async fn create_profile(&self, record: &NewProfile) -> Result<Profile, ApiError> {
        self.create(PROFILES_TABLE, record).await
    }

    /// Create an auth account. The backend signs the new user in and
    /// returns a session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let session = self
            .auth_request("signup", &Credentials { email, password })
            .await?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Exchange email + password for a bearer session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let session = self
            .auth_request("token?grant_type=password", &Credentials { email, password })
            .await?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Revoke the session remotely and clear it locally. The local session
    /// is cleared even if the logout request fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let session = self.session.write().await.take();
        let Some(session) = session else {
            return Ok(());
        };

        let response = self
            .http
            .post(self.config.auth_url("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// The compound registration path: create the auth account, then insert
    /// the profile row with the fresh session attached.
    ///
    /// The two calls have no transactional guarantee. If the insert fails
    /// after the account exists it is retried once; a second failure keeps
    /// the session and reports [`ApiError::ProfileIncomplete`] so the user
    /// can re-submit the profile without signing up again.
    pub async fn register_account(
        &self,
        email: &str,
        password: &str,
        record: &NewProfile,
    ) -> Result<(Session, Profile), ApiError> {
        let session = self.sign_up(email, password).await?;

        match self.create_profile(record).await {
            Ok(profile) => Ok((session, profile)),
            Err(first) => {
                if first.is_duplicate() {
                    return Err(first);
                }
                tracing::warn!("profile insert failed after sign-up, retrying: {first}");
                match self.create_profile(record).await {
                    Ok(profile) => Ok((session, profile)),
                    Err(second) => Err(ApiError::ProfileIncomplete(second.to_string())),
                }
            }
        }
    }

    /// Headers common to every request. The bearer token is the session's
    /// access token when present, the anon key otherwise.
    async fn headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Ok(value) = header::HeaderValue::from_str(&self.config.anon_key) {
            headers.insert("apikey", value);
        }
        let token = self
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone());
        if let Ok(value) = header::HeaderValue::from_str(&format!("Bearer {token}")) {
            headers.insert(header::AUTHORIZATION, value);
        }
        headers
    }

    async fn auth_request<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Session, ApiError> {
        let response = self
            .http
            .post(self.config.auth_url(path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-2xx response into [`ApiError::Remote`], pulling the
    /// message out of the JSON body.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Remote {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}
