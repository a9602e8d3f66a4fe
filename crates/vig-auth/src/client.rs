//! HTTP client for the external authentication service.
//!
//! Endpoints: `POST /login`, `GET /me`, `POST /token/refresh`,
//! `POST /logout`. Response mapping only; session state lives in
//! [`crate::session::SessionManager`].

use serde::Deserialize;
use vig_core::{Identity, Role};

use crate::error::AuthError;

/// Tokens and inline user fields returned by `POST /login`.
///
/// The inline `user` may be stale or partial; the Session Manager always
/// follows up with `GET /me` for the canonical identity.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Thin reqwest wrapper over the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// `base_url` is the API root without a trailing slash,
    /// e.g. `https://vigil.example/api`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// `POST /login` with an email/password pair.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the service rejects the pair,
    /// [`AuthError::Network`] when the request cannot complete,
    /// [`AuthError::Api`] for any other non-success status.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let resp = self
            .http
            .post(format!("{}/login/", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(resp.json().await?)
    }

    /// `GET /me` with a bearer token: canonical identity for the session.
    ///
    /// # Errors
    ///
    /// [`AuthError::IdentityFetch`] for a non-success status,
    /// [`AuthError::Network`] when the request cannot complete.
    pub async fn me(&self, access_token: &str) -> Result<Identity, AuthError> {
        let resp = self
            .http
            .get(format!("{}/me/", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::IdentityFetch(format!(
                "identity endpoint returned {status}"
            )));
        }
        resp.json()
            .await
            .map_err(|e| AuthError::IdentityFetch(format!("identity response did not parse: {e}")))
    }

    /// `POST /token/refresh`: trade a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// [`AuthError::RefreshFailure`] when the endpoint rejects the token,
    /// [`AuthError::Network`] when the request cannot complete.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let resp = self
            .http
            .post(format!("{}/token/refresh/", self.base_url))
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::RefreshFailure(format!(
                "refresh endpoint returned {status}"
            )));
        }
        let body: RefreshResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::RefreshFailure(format!("refresh response did not parse: {e}")))?;
        Ok(body.access)
    }

    /// `POST /logout`: best-effort server notification. The response status
    /// is ignored by callers; only transport failures surface.
    ///
    /// # Errors
    ///
    /// [`AuthError::Network`] when the request cannot complete.
    pub async fn logout(&self, access_token: Option<&str>) -> Result<(), AuthError> {
        let mut request = self.http.post(format!("{}/logout/", self.base_url));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request.send().await?;
        Ok(())
    }
}
