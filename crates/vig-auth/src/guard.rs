//! Route guarding: allow or redirect a navigation attempt.
//!
//! One authoritative table of public-shaped paths; every other path
//! requires an authenticated session. Pure decisions, no I/O.

/// Paths reachable without authentication: landing/marketing pages plus the
/// login and registration screens. Matching is segment-aware: `/login`
/// covers `/login/reset` but not `/login-help`.
pub const PUBLIC_PATHS: &[&str] = &["/", "/home", "/login", "/register"];

/// Where an unauthenticated visitor lands.
pub const LANDING: &str = "/home";

/// Where an authenticated session is sent away from public-shaped pages.
/// A protected path, so the redirect is terminal under re-evaluation.
pub const SIGNED_IN_LANDING: &str = "/planning";

/// Outcome of a navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Decide whether `path` may be shown given the session's authenticated
/// flag.
///
/// Closed two-state machine: an authenticated session on a public-shaped
/// path is redirected to [`SIGNED_IN_LANDING`]; an unauthenticated session
/// on a protected path is redirected to [`LANDING`]. Both targets resolve
/// to [`RouteDecision::Allow`] on the next evaluation, so no navigation is
/// ever double-redirected.
#[must_use]
pub fn decide(path: &str, authenticated: bool) -> RouteDecision {
    match (authenticated, is_public_path(path)) {
        (true, true) => RouteDecision::RedirectTo(SIGNED_IN_LANDING),
        (false, false) => RouteDecision::RedirectTo(LANDING),
        _ => RouteDecision::Allow,
    }
}

/// Segment-aware prefix match against [`PUBLIC_PATHS`].
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| {
        if *public == "/" {
            return path == "/";
        }
        match path.strip_prefix(public) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    })
}
