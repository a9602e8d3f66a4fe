use serde::{Deserialize, Serialize};

/// Role attached to a user account by the account service.
///
/// Unrecognized role strings deserialize to [`Role::Unknown`] instead of
/// failing; a new server-side role must not break existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
    Inspector,
    #[serde(other)]
    #[default]
    Unknown,
}

impl Role {
    /// Parse a stored role string (Token Store round trip).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "supervisor" => Self::Supervisor,
            "inspector" => Self::Inspector,
            _ => Self::Unknown,
        }
    }

    /// Stable string form used for persistence and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supervisor => "supervisor",
            Self::Inspector => "inspector",
            Self::Unknown => "unknown",
        }
    }
}

/// Resolved user profile backing an authenticated session.
///
/// Produced by `vig-auth` from the identity endpoint, immutable for the
/// session's lifetime, refetched on every bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Account id.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Superuser flag; takes precedence over `role` for initial routing.
    #[serde(default)]
    pub is_superuser: bool,
}
