//! Brazilian holiday calendar.
//!
//! Ten fixed-date holidays and three Easter-relative ones:
//! * Ano Novo (Jan 1)
//! * Carnaval (Easter − 47)
//! * Páscoa (Easter Sunday)
//! * Tiradentes (Apr 21)
//! * Dia do Trabalho (May 1)
//! * Dia dos Namorados (Jun 12)
//! * Corpus Christi (Easter + 60)
//! * Independência do Brasil (Sep 7)
//! * Nossa Senhora Aparecida (Oct 12)
//! * Finados (Nov 2)
//! * Proclamação da República (Nov 15)
//! * Dia da Consciência Negra (Nov 20)
//! * Natal (Dec 25)
//!
//! Fixed dates take precedence: when Easter or Corpus Christi lands on a
//! fixed holiday (Easter 2019-04-21, Corpus Christi 2031-06-12) the fixed
//! name is reported.

use crate::calendar::{Holiday, HolidayCalendar, HolidayKind};
use crate::date::Date;
use crate::easter;
use crate::month::Month;

/// A fixed-date holiday: same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Month of the holiday.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
    /// Display name.
    pub name: &'static str,
}

/// The ten fixed-date holidays, in calendar order.
pub const FIXED_HOLIDAYS: [FixedHoliday; 10] = [
    FixedHoliday { month: Month::January, day: 1, name: "Ano Novo" },
    FixedHoliday { month: Month::April, day: 21, name: "Tiradentes" },
    FixedHoliday { month: Month::May, day: 1, name: "Dia do Trabalho" },
    FixedHoliday { month: Month::June, day: 12, name: "Dia dos Namorados" },
    FixedHoliday { month: Month::September, day: 7, name: "Independência do Brasil" },
    FixedHoliday { month: Month::October, day: 12, name: "Nossa Senhora Aparecida" },
    FixedHoliday { month: Month::November, day: 2, name: "Finados" },
    FixedHoliday { month: Month::November, day: 15, name: "Proclamação da República" },
    FixedHoliday { month: Month::November, day: 20, name: "Dia da Consciência Negra" },
    FixedHoliday { month: Month::December, day: 25, name: "Natal" },
];

/// Name of Carnival Tuesday.
pub const CARNIVAL: &str = "Carnaval";
/// Name of Easter Sunday.
pub const EASTER: &str = "Páscoa";
/// Name of Corpus Christi.
pub const CORPUS_CHRISTI: &str = "Corpus Christi";

/// Brazilian holiday calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brazil;

impl Brazil {
    /// Look up `(month, day)` in the fixed-date table.
    pub fn fixed_holiday(month: u8, day: u8) -> Option<&'static FixedHoliday> {
        FIXED_HOLIDAYS
            .iter()
            .find(|h| h.month.number() == month && h.day == day)
    }

    /// The Easter-relative holidays of `year`: Carnaval, Páscoa, Corpus Christi.
    pub fn movable_holidays(year: u16) -> [(Date, &'static str); 3] {
        [
            (easter::carnival(year), CARNIVAL),
            (easter::easter_sunday(year), EASTER),
            (easter::corpus_christi(year), CORPUS_CHRISTI),
        ]
    }

    /// All holidays of `year` sorted by date.
    ///
    /// A movable holiday that coincides with a fixed one is listed once,
    /// under the fixed name.
    pub fn holidays_in_year(&self, year: u16) -> Vec<(Date, Holiday)> {
        let mut list: Vec<(Date, Holiday)> = FIXED_HOLIDAYS
            .iter()
            .filter_map(|h| Date::from_ymd(year, h.month.number(), h.day).ok())
            .filter_map(|d| self.holiday(d).map(|h| (d, h)))
            .collect();
        for (d, _) in Self::movable_holidays(year) {
            if let Some(h) = self.holiday(d) {
                if h.kind == HolidayKind::Movable {
                    list.push((d, h));
                }
            }
        }
        list.sort_by_key(|(d, _)| *d);
        list
    }
}

impl HolidayCalendar for Brazil {
    fn name(&self) -> &str {
        "Brasil"
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        let (year, month, day) = date.ymd();
        if let Some(fixed) = Self::fixed_holiday(month, day) {
            return Some(Holiday {
                name: fixed.name,
                kind: HolidayKind::Fixed,
            });
        }
        Self::movable_holidays(year)
            .into_iter()
            .find(|(d, _)| *d == date)
            .map(|(_, name)| Holiday {
                name,
                kind: HolidayKind::Movable,
            })
    }
}

/// Holiday name for `date` in the Brazilian calendar, or `""` if none.
pub fn holiday_name(date: Date) -> &'static str {
    Brazil.holiday_name(date)
}
