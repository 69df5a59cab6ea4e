//! Concrete holiday calendars.

/// Brazilian national holidays.
pub mod brazil;
