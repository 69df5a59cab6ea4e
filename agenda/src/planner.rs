//! Day planning: what the time picker shows for a selected date.
//!
//! A date selection feeds the holiday calendar (for the informational label)
//! and the availability filter; the work window supplies the candidate
//! slots, which the filter then tags as free or blocked.

use agenda_core::errors::Result;
use agenda_core::ProviderId;
use agenda_time::{
    filter_blocked_for_date, is_available, BlockedInterval, Date, HolidayCalendar, SlotRequest,
    TimeLabel, WorkWindow,
};
use serde::Serialize;

use crate::config::AgendaConfig;
use crate::snapshot::{collect_blocked, AppointmentRecord, BlockRecord};

/// A candidate slot and whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotOption {
    /// Slot label.
    pub time: TimeLabel,
    /// `false` if some blocked interval covers the slot.
    pub available: bool,
}

/// Everything the scheduling screen needs for one provider and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    /// Provider being booked.
    pub provider_id: ProviderId,
    /// Selected date.
    pub date: Date,
    /// Weekday name (`"sexta-feira"`, …).
    pub weekday: &'static str,
    /// Holiday name, if the date is one.
    pub holiday: Option<&'static str>,
    /// Every candidate slot of the work window, in order.
    pub slots: Vec<SlotOption>,
}

impl DayPlan {
    /// The slots that can still be booked.
    pub fn selectable(&self) -> Vec<TimeLabel> {
        self.slots
            .iter()
            .filter(|s| s.available)
            .map(|s| s.time)
            .collect()
    }

    /// Holiday label, or `""` when the date is not a holiday.
    pub fn holiday_label(&self) -> &'static str {
        self.holiday.unwrap_or("")
    }

    /// Return `true` if no slot is left.
    pub fn is_fully_booked(&self) -> bool {
        self.slots.iter().all(|s| !s.available)
    }
}

/// Builds [`DayPlan`]s from a holiday calendar and a work window.
#[derive(Debug)]
pub struct DayPlanner {
    calendar: Box<dyn HolidayCalendar>,
    window: WorkWindow,
}

impl DayPlanner {
    /// Create a planner.
    pub fn new(calendar: Box<dyn HolidayCalendar>, window: WorkWindow) -> Self {
        Self { calendar, window }
    }

    /// Create a planner from configuration.
    pub fn from_config(config: &AgendaConfig) -> Result<Self> {
        Ok(Self::new(config.calendar(), config.work_window()?))
    }

    /// The work window used for candidate slots.
    pub fn window(&self) -> &WorkWindow {
        &self.window
    }

    /// The calendar used for holiday labels.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Plan `date` for `provider_id` against a blocked-interval snapshot.
    ///
    /// The snapshot may hold other providers and dates; they are ignored.
    #[tracing::instrument(level = "debug", skip(self, blocked), fields(snapshot = blocked.len()))]
    pub fn plan(&self, provider_id: ProviderId, date: Date, blocked: &[BlockedInterval]) -> DayPlan {
        let relevant = filter_blocked_for_date(blocked, provider_id, date);
        let slots: Vec<SlotOption> = self
            .window
            .slots()
            .map(|time| SlotOption {
                time,
                available: is_available(
                    &SlotRequest {
                        provider_id,
                        date,
                        time,
                    },
                    &relevant,
                ),
            })
            .collect();
        let plan = DayPlan {
            provider_id,
            date,
            weekday: date.weekday().pt_name(),
            holiday: self.calendar.holiday(date).map(|h| h.name),
            slots,
        };
        tracing::debug!(
            relevant = relevant.len(),
            candidates = plan.slots.len(),
            selectable = plan.slots.iter().filter(|s| s.available).count(),
            holiday = plan.holiday_label(),
            "planned day"
        );
        plan
    }

    /// Plan `date` from raw API rows.
    ///
    /// Appointments occupy one interval of the work window each.
    pub fn plan_from_records(
        &self,
        provider_id: ProviderId,
        date: Date,
        blocks: &[BlockRecord],
        appointments: &[AppointmentRecord],
    ) -> DayPlan {
        let blocked = collect_blocked(blocks, appointments, self.window.interval_minutes());
        self.plan(provider_id, date, &blocked)
    }
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::new(Box::new(agenda_time::Brazil), WorkWindow::default())
    }
}
