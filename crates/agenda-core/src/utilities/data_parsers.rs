//! Data parsing helpers.
//!
//! Parse the date and time-of-day strings exchanged with the scheduling API
//! and the calendar widgets. The functions only check the *shape* of the
//! input and split it into numeric components; range validation (month 1–12,
//! day within the month, hour of day) belongs to the typed constructors in
//! `agenda-time`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A trailing time part (`YYYY-MM-DDTHH:MM:SS…`) is accepted and ignored so
/// that datetime columns are read as the civil date they start on, without
/// any time-zone shift.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let date_part = match s.find(['T', ' ']) {
        Some(idx) => &s[..idx],
        None => s,
    };
    let mut parts = date_part.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() || year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    Some((digits(year)?, digits(month)?, digits(day)?))
}

/// Parse a date string in `DD/MM/YYYY` format (the Brazilian display form).
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    let day: u8 = digits(parts[0])?;
    let month: u8 = digits(parts[1])?;
    let year: u16 = digits(parts[2])?;
    Some((year, month, day))
}

/// Parse a time-of-day string `HH:MM` or `HH:MM:SS`.
///
/// The hour may have one or two digits; minutes and seconds must have two.
/// Seconds, when present, are dropped from the result.
///
/// Returns `(hour, minute)` on success.
pub fn parse_time_of_day(s: &str) -> Option<(u8, u8)> {
    let s = s.trim();
    let mut parts = s.split(':');
    let hour = parts.next()?;
    let minute = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() || hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if let Some(sec) = second {
        if sec.len() != 2 || digits::<u8>(sec)? > 59 {
            return None;
        }
    }
    Some((digits(hour)?, digits(minute)?))
}

/// Parse a run of ASCII digits; rejects signs, blanks and empty input.
fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
