//! # agenda-time
//!
//! Civil dates, Brazilian holidays, appointment time slots, and availability
//! filtering.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state,
//! no caching. Callers pass already-resolved snapshots and get fresh results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Blocked intervals and the availability predicate.
pub mod availability;

/// `HolidayCalendar` trait and the holiday-free calendar.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter computus and Easter-relative feast days.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `WorkWindow` and slot generation.
pub mod slots;

/// `TimeLabel` — `HH:MM` time of day.
pub mod time_label;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use availability::{
    filter_blocked_for_date, is_available, selectable_slots, BlockedInterval, SlotRequest,
};
pub use calendar::{Holiday, HolidayCalendar, HolidayKind, NoHolidays};
pub use calendars::brazil::{holiday_name, Brazil};
pub use date::Date;
pub use month::Month;
pub use slots::{generate_slots, Slots, WorkWindow};
pub use time_label::TimeLabel;
pub use weekday::Weekday;
