//! Scheduling configuration.
//!
//! Loaded from TOML; every section and key is optional:
//!
//! ```toml
//! [work_window]
//! start = "08:00"
//! end = "18:00"
//! interval_minutes = 30
//!
//! [holidays]
//! calendar = "brazil"   # or "none"
//! ```

use std::path::Path;

use agenda_core::errors::{Error, Result};
use agenda_core::Minutes;
use agenda_time::slots::DEFAULT_INTERVAL_MINUTES;
use agenda_time::{Brazil, HolidayCalendar, NoHolidays, WorkWindow};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgendaConfig {
    /// Default working window offered in the time picker.
    pub work_window: WorkWindowConfig,
    /// Holiday annotation settings.
    pub holidays: HolidayConfig,
}

/// `[work_window]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkWindowConfig {
    /// First slot, `HH:MM`.
    pub start: String,
    /// Last slot (inclusive), `HH:MM`.
    pub end: String,
    /// Minutes between slots.
    pub interval_minutes: Minutes,
}

impl Default for WorkWindowConfig {
    fn default() -> Self {
        Self {
            start: "08:00".into(),
            end: "18:00".into(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

/// `[holidays]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidayConfig {
    /// Which holiday calendar annotates the selected day.
    pub calendar: CalendarChoice,
}

/// Selectable holiday calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarChoice {
    /// Brazilian national holidays.
    #[default]
    Brazil,
    /// No holiday annotations.
    #[serde(rename = "none")]
    Disabled,
}

impl AgendaConfig {
    /// Decode a TOML document and check that its work window is usable.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: AgendaConfig =
            toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))?;
        config.work_window()?;
        Ok(config)
    }

    /// Read and decode a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            start = %config.work_window.start,
            end = %config.work_window.end,
            interval_minutes = config.work_window.interval_minutes,
            calendar = ?config.holidays.calendar,
            "loaded scheduling configuration"
        );
        Ok(config)
    }

    /// The configured work window, parsed and validated.
    pub fn work_window(&self) -> Result<WorkWindow> {
        let ww = &self.work_window;
        let window = WorkWindow::parse(&ww.start, &ww.end, ww.interval_minutes)
            .map_err(|e| Error::Config(format!("[work_window]: {e}")))?;
        window
            .validate()
            .map_err(|e| Error::Config(format!("[work_window]: {e}")))?;
        Ok(window)
    }

    /// The configured holiday calendar.
    pub fn calendar(&self) -> Box<dyn HolidayCalendar> {
        match self.holidays.calendar {
            CalendarChoice::Brazil => Box::new(Brazil),
            CalendarChoice::Disabled => Box::new(NoHolidays),
        }
    }
}
