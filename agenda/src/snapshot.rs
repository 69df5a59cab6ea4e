//! Raw snapshot rows from the scheduling API.
//!
//! Dates and times arrive as strings. Rows that do not parse are dropped
//! with a warning, so a malformed row never blocks a slot and never aborts
//! the day plan.

use agenda_core::errors::{Error, Result};
use agenda_core::{Minutes, ProviderId};
use agenda_time::{BlockedInterval, Date, TimeLabel};
use serde::Deserialize;

/// A provider-created block as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    /// Provider the block belongs to.
    pub provider_id: ProviderId,
    /// `YYYY-MM-DD` (a trailing time part is ignored).
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub start: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub end: String,
}

impl BlockRecord {
    /// Parse into a typed interval.
    pub fn to_interval(&self) -> Result<BlockedInterval> {
        Ok(BlockedInterval {
            provider_id: self.provider_id,
            date: Date::parse_iso(&self.date)?,
            start: TimeLabel::parse(&self.start)?,
            end: TimeLabel::parse(&self.end)?,
        })
    }
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AppointmentStatus {
    /// Requested, awaiting confirmation.
    #[serde(alias = "pendente")]
    Pendente,
    /// Confirmed by the provider.
    #[serde(alias = "confirmada")]
    Confirmada,
    /// Cancelled by either party.
    #[serde(alias = "cancelada")]
    Cancelada,
    /// Took place.
    #[serde(alias = "realizada")]
    Realizada,
}

impl AppointmentStatus {
    /// Return `true` if an appointment in this state holds its slot.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelada)
    }
}

/// An appointment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    /// Appointment id.
    pub id: u64,
    /// Provider the appointment is booked with.
    pub provider_id: ProviderId,
    /// `YYYY-MM-DD` (a trailing time part is ignored).
    pub date: String,
    /// Start time, `HH:MM` or `HH:MM:SS`.
    pub time: String,
    /// Current state.
    pub status: AppointmentStatus,
}

impl AppointmentRecord {
    /// The slot this appointment occupies, `[time, time + slot_minutes)`.
    ///
    /// `None` for cancelled appointments. An appointment running past the
    /// end of the day is clipped at `24:00`, so even a `23:59` booking holds
    /// its slot.
    pub fn to_interval(&self, slot_minutes: Minutes) -> Result<Option<BlockedInterval>> {
        let date = Date::parse_iso(&self.date)?;
        let start = TimeLabel::parse(&self.time)?;
        if !self.status.occupies_slot() {
            return Ok(None);
        }
        if slot_minutes == 0 {
            return Err(Error::InvalidArgument(
                "appointment slot length must be positive".into(),
            ));
        }
        if !start.is_bookable() {
            return Err(Error::InvalidArgument(format!(
                "appointment {} starts at {start}",
                self.id
            )));
        }
        let end = start.add_minutes_capped(slot_minutes as u32);
        Ok(Some(BlockedInterval {
            provider_id: self.provider_id,
            date,
            start,
            end,
        }))
    }
}

/// Merge block and appointment rows into one interval snapshot.
///
/// Block rows come first, then appointments, each in their original order.
/// Malformed rows are logged and skipped.
pub fn collect_blocked(
    blocks: &[BlockRecord],
    appointments: &[AppointmentRecord],
    slot_minutes: Minutes,
) -> Vec<BlockedInterval> {
    let mut out = Vec::with_capacity(blocks.len() + appointments.len());
    for row in blocks {
        match row.to_interval() {
            Ok(interval) => out.push(interval),
            Err(err) => tracing::warn!(
                provider_id = row.provider_id,
                date = %row.date,
                error = %err,
                "skipping malformed block row"
            ),
        }
    }
    for row in appointments {
        match row.to_interval(slot_minutes) {
            Ok(Some(interval)) => out.push(interval),
            Ok(None) => {}
            Err(err) => tracing::warn!(
                appointment_id = row.id,
                provider_id = row.provider_id,
                error = %err,
                "skipping malformed appointment row"
            ),
        }
    }
    out
}
