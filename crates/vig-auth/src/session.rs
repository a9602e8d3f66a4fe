//! Session lifecycle: bootstrap, login, silent refresh, logout.
//!
//! The [`SessionManager`] is the single owner of session state and the only
//! writer to the [`TokenStore`]. It is passed explicitly to everything that
//! needs it; there is no ambient global session. Navigation signals
//! ([`Destination`]) are advisory return values; the calling layer decides
//! how to act on them.

use vig_core::{Identity, Role};

use crate::client::AuthClient;
use crate::error::AuthError;
use crate::token_store::{StoredCredentials, TokenStore};

/// Advisory navigation signal emitted by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Superuser landing: account administration.
    AdminHome,
    /// Supervisor landing: the inspector calendar overview.
    CalendarOverview,
    /// Inspector landing: the inspector's own planning.
    OwnPlanning,
    /// Forced return to the login screen.
    Login,
}

impl Destination {
    /// Route path of the destination screen.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AdminHome => "/admin",
            Self::CalendarOverview => "/calendar",
            Self::OwnPlanning => "/planning",
            Self::Login => "/login",
        }
    }
}

/// Authenticated-or-not state of the current client, plus its tokens.
///
/// Invariant: `identity` is present iff both tokens are present and were
/// validated against the authentication service at least once since the
/// last refresh.
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<Identity>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Bearer token for outbound calls. Absence means "unauthenticated",
    /// never an error.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Owns identity state and orchestrates the session lifecycle.
pub struct SessionManager {
    client: AuthClient,
    store: TokenStore,
    session: Session,
}

impl SessionManager {
    #[must_use]
    pub const fn new(client: AuthClient, store: TokenStore) -> Self {
        Self {
            client,
            store,
            session: Session {
                identity: None,
                access_token: None,
                refresh_token: None,
            },
        }
    }

    /// Read-only snapshot of the current session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token()
    }

    /// Resume a session from persisted tokens at application start.
    ///
    /// With no stored access token this is a no-op and issues no network
    /// call. Otherwise the stored token is validated against the identity
    /// endpoint; on any failure both tokens are cleared and the session is
    /// left unauthenticated. Failures never surface to the caller; the
    /// outcome is observable only through the resulting session state.
    pub async fn bootstrap(&mut self) {
        let Some(stored) = self.store.load() else {
            return;
        };

        match self.client.me(&stored.access_token).await {
            Ok(identity) => {
                self.session = Session {
                    identity: Some(identity),
                    access_token: Some(stored.access_token),
                    refresh_token: (!stored.refresh_token.is_empty())
                        .then_some(stored.refresh_token),
                };
            }
            Err(error) => {
                tracing::warn!(%error, "session bootstrap failed; clearing stored tokens");
                if let Err(error) = self.store.clear() {
                    tracing::warn!(%error, "failed to clear token store after bootstrap failure");
                }
                self.session = Session::default();
            }
        }
    }

    /// Authenticate with an email/password pair.
    ///
    /// On success both tokens and the inline user fields are persisted, then
    /// a second round trip fetches the canonical identity (the inline user
    /// in the auth response may be stale or partial). Only after that second
    /// call succeeds does the session become authenticated and a role-based
    /// destination get signaled; a role without a mapped screen yields
    /// `None` and the caller must handle it.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the service rejects the pair,
    /// [`AuthError::Network`] when a request cannot complete,
    /// [`AuthError::IdentityFetch`] when the follow-up identity call fails;
    /// the session stays unauthenticated but the persisted tokens remain for
    /// a later bootstrap.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<Destination>, AuthError> {
        let auth = self.client.login(email, password).await?;

        // Token persistence must complete before the identity round trip.
        self.store.store(&StoredCredentials {
            access_token: auth.access.clone(),
            refresh_token: auth.refresh.clone(),
            user_id: auth.user.id.to_string(),
            role: auth.user.role.as_str().to_string(),
        })?;

        let identity = match self.client.me(&auth.access).await {
            Ok(identity) => identity,
            Err(error) => {
                self.session = Session::default();
                return Err(error);
            }
        };

        let destination = initial_destination(&identity);
        self.session = Session {
            identity: Some(identity),
            access_token: Some(auth.access),
            refresh_token: Some(auth.refresh),
        };
        Ok(destination)
    }

    /// Replace an expired access token using the stored refresh token.
    ///
    /// This is a forced logout on failure, not a silent retry: with no
    /// stored refresh token, or when the refresh endpoint rejects it, the
    /// session and store are cleared entirely and the caller should route
    /// to the login screen. On success only the access token is replaced;
    /// the identity is untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::RefreshFailure`] after the session has been cleared.
    pub async fn refresh(&mut self) -> Result<(), AuthError> {
        let refresh_token = self
            .store
            .load()
            .map(|stored| stored.refresh_token)
            .filter(|token| !token.is_empty());

        let Some(refresh_token) = refresh_token else {
            self.force_logout();
            return Err(AuthError::RefreshFailure("no refresh token stored".into()));
        };

        let access = match self.client.refresh(&refresh_token).await {
            Ok(access) => access,
            Err(error) => {
                tracing::warn!(%error, "token refresh rejected; clearing session");
                self.force_logout();
                return Err(AuthError::RefreshFailure(error.to_string()));
            }
        };

        if let Some(mut stored) = self.store.load() {
            stored.access_token = access.clone();
            self.store.store(&stored)?;
        }
        self.session.access_token = Some(access);
        Ok(())
    }

    /// Notify the service (best effort), then unconditionally clear the
    /// session. Always signals [`Destination::Login`].
    pub async fn logout(&mut self) -> Destination {
        if let Err(error) = self
            .client
            .logout(self.session.access_token.as_deref())
            .await
        {
            tracing::warn!(%error, "logout notification failed");
        }
        self.force_logout();
        Destination::Login
    }

    fn force_logout(&mut self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear token store");
        }
        self.session = Session::default();
    }
}

/// Role-based initial screen after a successful login.
fn initial_destination(identity: &Identity) -> Option<Destination> {
    if identity.is_superuser {
        return Some(Destination::AdminHome);
    }
    match identity.role {
        Role::Supervisor => Some(Destination::CalendarOverview),
        Role::Inspector => Some(Destination::OwnPlanning),
        Role::Admin | Role::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role, is_superuser: bool) -> Identity {
        Identity {
            id: 1,
            email: "user@vigil.test".into(),
            display_name: None,
            role,
            is_superuser,
        }
    }

    #[test]
    fn superuser_routes_to_admin_home_regardless_of_role() {
        let destination = initial_destination(&identity(Role::Inspector, true));
        assert_eq!(destination, Some(Destination::AdminHome));
    }

    #[test]
    fn supervisor_routes_to_calendar_overview() {
        let destination = initial_destination(&identity(Role::Supervisor, false));
        assert_eq!(destination, Some(Destination::CalendarOverview));
    }

    #[test]
    fn inspector_routes_to_own_planning() {
        let destination = initial_destination(&identity(Role::Inspector, false));
        assert_eq!(destination, Some(Destination::OwnPlanning));
    }

    #[test]
    fn unmapped_roles_yield_no_destination() {
        assert_eq!(initial_destination(&identity(Role::Unknown, false)), None);
        assert_eq!(initial_destination(&identity(Role::Admin, false)), None);
    }

    #[test]
    fn destination_paths_are_stable() {
        assert_eq!(Destination::AdminHome.path(), "/admin");
        assert_eq!(Destination::CalendarOverview.path(), "/calendar");
        assert_eq!(Destination::OwnPlanning.path(), "/planning");
        assert_eq!(Destination::Login.path(), "/login");
    }
}
