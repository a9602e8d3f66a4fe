//! # vig-planning
//!
//! Calendar-planning aggregation for the vigil client: Monday-first month
//! grids with per-day classification (idle / planned / completed / weekend),
//! single-day document resolution, and the planning-service HTTP client
//! with a bounded refresh-and-retry on 401.

pub mod calendar;
pub mod client;
pub mod error;
pub mod resolve;

pub use calendar::{CalendarSlot, DayStatus, MonthCursor, month_grid};
pub use client::PlanningClient;
pub use error::PlanningError;
pub use resolve::resolve_day;
