use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session refresh failed: {0}")]
    RefreshFailure(String),

    #[error("identity fetch failed: {0}")]
    IdentityFetch(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("auth service error ({status}): {message}")]
    Api { status: u16, message: String },
}
