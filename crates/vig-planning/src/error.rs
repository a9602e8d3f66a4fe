use thiserror::Error;
use vig_auth::AuthError;

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("not authenticated, run `vgl auth login`")]
    NotAuthenticated,

    #[error("network failure: {0}")]
    Http(#[from] reqwest::Error),

    #[error("planning service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),
}
