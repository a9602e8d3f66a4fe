//! HTTP client for the external planning service.
//!
//! Every call sends the session's bearer token. A 401 triggers exactly one
//! silent refresh through the Session Manager followed by one retry;
//! an explicit bound, never a self-recursive fetch.

use serde::de::DeserializeOwned;
use vig_auth::SessionManager;
use vig_core::{Inspector, PlanningRecord};

use crate::error::PlanningError;

#[derive(Debug, Clone)]
pub struct PlanningClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlanningClient {
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

    /// `GET /planning`: the signed-in inspector's own planning records.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn fetch_own(
        &self,
        session: &mut SessionManager,
    ) -> Result<Vec<PlanningRecord>, PlanningError> {
        self.get_json(session, "/planning/").await
    }

    /// `GET /calendar/{id}/planning`: one inspector's records, for the
    /// supervisor's calendar browse.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn fetch_for_inspector(
        &self,
        session: &mut SessionManager,
        inspector_id: i64,
    ) -> Result<Vec<PlanningRecord>, PlanningError> {
        self.get_json(session, &format!("/calendar/{inspector_id}/planning/"))
            .await
    }

    /// `GET /calendar`: the inspectors a supervisor may browse.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn list_inspectors(
        &self,
        session: &mut SessionManager,
    ) -> Result<Vec<Inspector>, PlanningError> {
        self.get_json(session, "/calendar/").await
    }

    /// Authenticated GET with a single refresh-and-retry on 401.
    ///
    /// # Errors
    ///
    /// [`PlanningError::NotAuthenticated`] without a session token,
    /// [`PlanningError::Auth`] when the 401-triggered refresh fails (the
    /// session is already cleared at that point),
    /// [`PlanningError::Api`] for any other non-success status,
    /// [`PlanningError::Http`] when a request cannot complete.
    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &mut SessionManager,
        path: &str,
    ) -> Result<T, PlanningError> {
        let resp = self.send(session, path).await?;

        let resp = if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            tracing::debug!(path, "planning fetch got 401; refreshing once");
            session.refresh().await?;
            let retry = self.send(session, path).await?;
            if retry.status() == reqwest::StatusCode::UNAUTHORIZED {
                return Err(PlanningError::Api {
                    status: 401,
                    message: "still unauthorized after token refresh".into(),
                });
            }
            retry
        } else {
            resp
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(PlanningError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn send(
        &self,
        session: &SessionManager,
        path: &str,
    ) -> Result<reqwest::Response, PlanningError> {
        let token = session
            .access_token()
            .ok_or(PlanningError::NotAuthenticated)?;
        Ok(self
            .http
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?)
    }
}
