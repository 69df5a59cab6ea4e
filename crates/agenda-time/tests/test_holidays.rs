//! Integration tests for the Brazilian holiday calendar and the Easter
//! computus.

use agenda_time::calendar::HolidayCalendar;
use agenda_time::calendars::brazil::{Brazil, FIXED_HOLIDAYS};
use agenda_time::easter::{carnival, corpus_christi, easter_sunday};
use agenda_time::{holiday_name, Date, HolidayKind, NoHolidays, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that the named holidays in `[from, to]` are exactly `expected`.
fn check_holidays(cal: &dyn HolidayCalendar, from: Date, to: Date, expected: &[(Date, &str)]) {
    let calculated: Vec<(Date, &str)> = cal
        .holiday_list(from, to)
        .into_iter()
        .map(|(d, h)| (d, h.name))
        .collect();
    assert_eq!(
        calculated,
        expected,
        "{}: holidays between {from} and {to} differ",
        cal.name()
    );
}

// ─── Fixed and movable holidays ───────────────────────────────────────────────

#[test]
fn brazil_holidays_2025() {
    let expected = [
        (date(2025, 1, 1), "Ano Novo"),
        (date(2025, 3, 4), "Carnaval"),
        (date(2025, 4, 20), "Páscoa"),
        (date(2025, 4, 21), "Tiradentes"),
        (date(2025, 5, 1), "Dia do Trabalho"),
        (date(2025, 6, 12), "Dia dos Namorados"),
        (date(2025, 6, 19), "Corpus Christi"),
        (date(2025, 9, 7), "Independência do Brasil"),
        (date(2025, 10, 12), "Nossa Senhora Aparecida"),
        (date(2025, 11, 2), "Finados"),
        (date(2025, 11, 15), "Proclamação da República"),
        (date(2025, 11, 20), "Dia da Consciência Negra"),
        (date(2025, 12, 25), "Natal"),
    ];
    check_holidays(&Brazil, date(2025, 1, 1), date(2025, 12, 31), &expected);

    let listed: Vec<(Date, &str)> = Brazil
        .holidays_in_year(2025)
        .into_iter()
        .map(|(d, h)| (d, h.name))
        .collect();
    assert_eq!(listed, expected);
}

#[test]
fn brazil_holidays_leap_year_2024() {
    // Easter 2024-03-31: Carnival 47 days earlier crosses Feb 29.
    let expected = [
        (date(2024, 2, 13), "Carnaval"),
        (date(2024, 3, 31), "Páscoa"),
        (date(2024, 4, 21), "Tiradentes"),
        (date(2024, 5, 1), "Dia do Trabalho"),
        (date(2024, 5, 30), "Corpus Christi"),
    ];
    check_holidays(&Brazil, date(2024, 2, 1), date(2024, 5, 31), &expected);
}

#[test]
fn concrete_2025_case() {
    assert_eq!(holiday_name(date(2025, 4, 20)), "Páscoa");
    assert_eq!(holiday_name(date(2025, 3, 4)), "Carnaval");
    assert_eq!(holiday_name(date(2025, 6, 19)), "Corpus Christi");
    assert_eq!(holiday_name(date(2025, 6, 20)), "");
}

#[test]
fn fixed_names_take_precedence() {
    assert_eq!(easter_sunday(2019), date(2019, 4, 21));
    assert_eq!(holiday_name(date(2019, 4, 21)), "Tiradentes");
    assert_eq!(
        Brazil.holiday(date(2019, 4, 21)).map(|h| h.kind),
        Some(HolidayKind::Fixed)
    );

    assert_eq!(corpus_christi(2031), date(2031, 6, 12));
    assert_eq!(holiday_name(date(2031, 6, 12)), "Dia dos Namorados");
}

#[test]
fn fixed_table_has_ten_entries() {
    assert_eq!(FIXED_HOLIDAYS.len(), 10);
    for h in FIXED_HOLIDAYS {
        let d = date(2030, h.month.number(), h.day);
        assert_eq!(holiday_name(d), h.name);
    }
}

#[test]
fn empty_range_and_null_calendar() {
    assert!(Brazil
        .holiday_list(date(2025, 12, 31), date(2025, 1, 1))
        .is_empty());
    check_holidays(&NoHolidays, date(2025, 1, 1), date(2025, 12, 31), &[]);
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fixed_dates_are_year_invariant(year in 1u16..=9999) {
        prop_assert_eq!(holiday_name(date(year, 1, 1)), "Ano Novo");
        prop_assert_eq!(holiday_name(date(year, 12, 25)), "Natal");
    }

    #[test]
    fn easter_within_march_22_april_25(year in 1u16..=9999) {
        let e = easter_sunday(year);
        prop_assert_eq!(e.year(), year);
        prop_assert!(e >= date(year, 3, 22) && e <= date(year, 4, 25), "Easter {} out of range", e);
    }

    #[test]
    fn movable_offsets(year in 1u16..=9999) {
        let e = easter_sunday(year);
        prop_assert_eq!(e - carnival(year), 47);
        prop_assert_eq!(corpus_christi(year) - e, 60);
        prop_assert_eq!(carnival(year).year(), year);
        prop_assert_eq!(corpus_christi(year).year(), year);
    }

    #[test]
    fn feast_weekdays(year in 1583u16..=9999) {
        prop_assert_eq!(easter_sunday(year).weekday(), Weekday::Sunday);
        prop_assert_eq!(carnival(year).weekday(), Weekday::Tuesday);
        prop_assert_eq!(corpus_christi(year).weekday(), Weekday::Thursday);
    }

    #[test]
    fn thirteen_or_fewer_holidays_per_year(year in 1u16..=9999) {
        let list = Brazil.holidays_in_year(year);
        prop_assert!((11..=13).contains(&list.len()));
        prop_assert!(list.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
