//! `WorkWindow` and slot generation.
//!
//! A work window is a provider's bookable range for a day plus the spacing
//! between consecutive appointments. Its slots are the ordered labels
//! `start, start + interval, …` up to and including `end`.

use agenda_core::errors::{Error, Result};
use agenda_core::{ensure, Minutes};

use crate::time_label::TimeLabel;

/// Default first slot of the day (`08:00`).
pub const DEFAULT_START: (u8, u8) = (8, 0);
/// Default last slot of the day (`18:00`).
pub const DEFAULT_END: (u8, u8) = (18, 0);
/// Default spacing between slots, in minutes.
pub const DEFAULT_INTERVAL_MINUTES: Minutes = 30;

/// A working-hours window with a slot interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkWindow {
    start: TimeLabel,
    end: TimeLabel,
    interval_minutes: Minutes,
}

impl WorkWindow {
    /// Create a window.
    ///
    /// Rejects a zero interval and a `24:00` start. An `end` of `24:00` is
    /// read as `23:59`. An inverted window (`start > end`) is
    /// accepted and simply yields no slots; use [`validate`](Self::validate)
    /// to reject it at an input boundary.
    pub fn new(start: TimeLabel, end: TimeLabel, interval_minutes: Minutes) -> Result<Self> {
        if interval_minutes == 0 {
            return Err(Error::InvalidArgument(
                "slot interval must be a positive number of minutes".into(),
            ));
        }
        if !start.is_bookable() {
            return Err(Error::InvalidArgument(format!(
                "work window cannot start at {start}"
            )));
        }
        Ok(Self {
            start,
            end: end.min(TimeLabel::LAST),
            interval_minutes,
        })
    }

    /// Parse a window from `HH:MM` labels.
    pub fn parse(start: &str, end: &str, interval_minutes: Minutes) -> Result<Self> {
        Self::new(TimeLabel::parse(start)?, TimeLabel::parse(end)?, interval_minutes)
    }

    /// First slot.
    pub fn start(&self) -> TimeLabel {
        self.start
    }

    /// Upper bound (inclusive) for slots.
    pub fn end(&self) -> TimeLabel {
        self.end
    }

    /// Spacing between consecutive slots.
    pub fn interval_minutes(&self) -> Minutes {
        self.interval_minutes
    }

    /// Return `true` if `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Check the `start <= end` invariant.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.is_inverted(),
            "work window start {} is after end {}",
            self.start,
            self.end
        );
        Ok(())
    }

    /// Iterate over the slots of this window.
    ///
    /// Every call starts a fresh iteration.
    pub fn slots(&self) -> Slots {
        Slots {
            next: self.start.minutes() as u32,
            end: self.end.minutes() as u32,
            step: self.interval_minutes as u32,
        }
    }
}

impl Default for WorkWindow {
    fn default() -> Self {
        Self {
            start: TimeLabel::from_hm(DEFAULT_START.0, DEFAULT_START.1)
                .unwrap_or(TimeLabel::MIDNIGHT),
            end: TimeLabel::from_hm(DEFAULT_END.0, DEFAULT_END.1).unwrap_or(TimeLabel::LAST),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

/// Iterator over the slots of a [`WorkWindow`].
#[derive(Debug, Clone)]
pub struct Slots {
    next: u32,
    end: u32,
    step: u32,
}

impl Iterator for Slots {
    type Item = TimeLabel;

    fn next(&mut self) -> Option<TimeLabel> {
        if self.next > self.end {
            return None;
        }
        let label = TimeLabel::from_minutes(self.next).ok()?;
        self.next += self.step;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.next > self.end {
            0
        } else {
            ((self.end - self.next) / self.step + 1) as usize
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Slots {}

impl std::iter::FusedIterator for Slots {}

/// Generate the ordered slot labels of `window`.
///
/// Inclusive of `end` when it lies on the interval grid; never overshoots
/// `end`; empty when the window is inverted.
pub fn generate_slots(window: &WorkWindow) -> Vec<TimeLabel> {
    window.slots().collect()
}
