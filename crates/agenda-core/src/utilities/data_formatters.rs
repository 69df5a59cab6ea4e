//! Data formatting helpers.
//!
//! The inverse of [`data_parsers`](super::data_parsers): zero-padded ISO
//! dates, Brazilian display dates, and 24-hour `HH:MM` labels.

/// Format a date as ISO 8601 (`YYYY-MM-DD`).
pub fn format_iso_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format a date in the Brazilian display form (`DD/MM/YYYY`).
pub fn format_date_slash(year: u16, month: u8, day: u8) -> String {
    format!("{day:02}/{month:02}/{year:04}")
}

/// Format a minute-of-day value as a zero-padded 24-hour label (`HH:MM`).
pub fn format_time_of_day(minute_of_day: u16) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
