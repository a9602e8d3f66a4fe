//! # vig-auth
//!
//! Session lifecycle for the vigil client: token persistence (`keyring` with
//! file fallback), login/bootstrap/refresh/logout against the external
//! authentication service (`reqwest`), role-based destination signaling, and
//! pure route guarding.
//!
//! The [`SessionManager`] is an explicit context object: construct one and
//! pass it to whatever needs session state. It exposes read-only snapshots
//! plus the mutating lifecycle operations, and is the sole writer to the
//! [`TokenStore`].

pub mod client;
pub mod error;
pub mod guard;
pub mod session;
pub mod token_store;

pub use client::AuthClient;
pub use error::AuthError;
pub use guard::RouteDecision;
pub use session::{Destination, Session, SessionManager};
pub use token_store::{StoredCredentials, TokenStore};
