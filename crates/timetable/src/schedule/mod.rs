//! Weekly schedule subsystem.
//!
//! The computation core (`week`, `matrix`) is pure and synchronous: given
//! a reference date it derives the Monday-aligned 7-day window and buckets
//! fetched entries into a (day x slot) grid. The only I/O lives in
//! `client`, which talks to the remote schedule API.

mod client;
mod config;
mod error;
mod matrix;
mod types;
pub mod week;

pub use client::{ScheduleSource, WeekScheduleClient};
pub use config::WeekScheduleConfig;
pub use error::ScheduleError;
pub use matrix::bucket;
pub use types::{ScheduleEntry, ScheduleMatrix, SessionKind, TimeSlot, WeekdayTag};
pub use week::{format_date, monday_of, parse_date, shift_week, week_dates, WeekWindow};
