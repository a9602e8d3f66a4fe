pub mod auth;
pub mod calendar;
pub mod planning;
pub mod shared;
