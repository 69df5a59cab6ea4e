//! `HolidayCalendar` trait and the holiday-free calendar.
//!
//! A calendar knows which dates are named holidays. The scheduling screens use
//! it to annotate the selected day and to list the holidays of a month.

use serde::Serialize;

use crate::date::Date;

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// Derived from the date of Easter.
    Movable,
}

/// A named holiday falling on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// Display name (e.g. `"Natal"`).
    pub name: &'static str,
    /// Fixed-date or Easter-relative.
    pub kind: HolidayKind,
}

/// A holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Brasil"`).
    fn name(&self) -> &str;

    /// Return the holiday falling on `date`, if any.
    fn holiday(&self, date: Date) -> Option<Holiday>;

    /// Return `true` if `date` is a holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday(date).is_some()
    }

    /// Holiday name for `date`, or the empty string when there is none.
    fn holiday_name(&self, date: Date) -> &'static str {
        self.holiday(date).map_or("", |h| h.name)
    }

    /// Collect all holidays in the inclusive range `[from, to]`, in date order.
    ///
    /// Returns an empty list when `to < from`.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<(Date, Holiday)> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(h) = self.holiday(d) {
                holidays.push((d, h));
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        holidays
    }
}

/// A calendar without holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "Sem feriados"
    }

    fn holiday(&self, _date: Date) -> Option<Holiday> {
        None
    }
}
