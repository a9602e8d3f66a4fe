//! Session and client construction shared by command handlers.

use std::time::Duration;

use anyhow::Context;
use vig_auth::guard::{self, RouteDecision};
use vig_auth::{AuthClient, SessionManager, TokenStore};
use vig_config::VigConfig;
use vig_planning::PlanningClient;

/// HTTP client with the configured per-request timeout.
///
/// # Errors
///
/// Returns an error when the client cannot be constructed.
pub fn http_client(config: &VigConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()
        .context("failed to build HTTP client")
}

/// Fresh session manager over the configured backend and the default
/// token store.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed.
pub fn session_manager(config: &VigConfig) -> anyhow::Result<SessionManager> {
    let client = AuthClient::new(http_client(config)?, config.api.base_url());
    Ok(SessionManager::new(client, TokenStore::new()))
}

/// Session manager after a bootstrap attempt from persisted tokens.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed; a failed
/// bootstrap itself is not an error (the session is just unauthenticated).
pub async fn bootstrapped_session(config: &VigConfig) -> anyhow::Result<SessionManager> {
    let mut session = session_manager(config)?;
    session.bootstrap().await;
    Ok(session)
}

/// Planning client over the configured backend.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed.
pub fn planning_client(config: &VigConfig) -> anyhow::Result<PlanningClient> {
    Ok(PlanningClient::new(
        http_client(config)?,
        config.api.base_url(),
    ))
}

/// Consult the route guard before entering a screen.
///
/// # Errors
///
/// Returns an error describing where the guard redirects instead.
pub fn require_screen(session: &SessionManager, path: &str) -> anyhow::Result<()> {
    match guard::decide(path, session.is_authenticated()) {
        RouteDecision::Allow => Ok(()),
        RouteDecision::RedirectTo(guard::LANDING) => {
            anyhow::bail!("not signed in; run `vgl auth login`")
        }
        RouteDecision::RedirectTo(target) => {
            anyhow::bail!("screen {path} is not available; continue at {target}")
        }
    }
}
