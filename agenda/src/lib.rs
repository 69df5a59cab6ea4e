//! # agenda
//!
//! Scheduling core of a university psychology-appointment service.
//!
//! This crate re-exports the workspace crates and adds the application-facing
//! layer on top of them: configuration, ingestion of API snapshot rows, the
//! day planner behind the time picker, and role-based route guarding.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda::planner::DayPlanner;
//! use agenda::time::{BlockedInterval, Date, TimeLabel};
//!
//! let planner = DayPlanner::default(); // 08:00–18:00 every 30 min, Brazilian holidays
//! let date: Date = "2025-04-21".parse().unwrap();
//! let blocked = [BlockedInterval {
//!     provider_id: 1,
//!     date,
//!     start: "08:00".parse().unwrap(),
//!     end: "09:00".parse().unwrap(),
//! }];
//!
//! let plan = planner.plan(1, date, &blocked);
//! assert_eq!(plan.holiday_label(), "Tiradentes");
//! assert_eq!(plan.selectable()[0], "09:00".parse::<TimeLabel>().unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared aliases, error definitions, and string helpers.
pub use agenda_core as shared;

/// Dates, holidays, slots, and availability.
pub use agenda_time as time;

/// Role-based route guarding.
pub mod access;

/// Scheduling configuration.
pub mod config;

/// Day planning for the time picker.
pub mod planner;

/// Raw snapshot rows from the scheduling API.
pub mod snapshot;

pub use access::{Area, GuardOutcome, Role, RouteGuard};
pub use agenda_core::{Error, Result};
pub use config::AgendaConfig;
pub use planner::{DayPlan, DayPlanner, SlotOption};
