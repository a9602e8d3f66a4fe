mod auth;
mod calendar;
mod planning;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use calendar::CalendarCommands;
pub use planning::{PlanningCommands, PlanningResolveArgs, PlanningShowArgs};
