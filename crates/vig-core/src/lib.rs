//! # vig-core
//!
//! Shared data types for the vigil inspection client.
//!
//! Contains only data fields: no I/O, no HTTP, no storage. Produced and
//! consumed across `vig-auth`, `vig-planning`, and `vig-cli`.

pub mod identity;
pub mod planning;

pub use identity::{Identity, Role};
pub use planning::{Inspector, PlanningRecord};
