//! Availability filtering over blocked-interval snapshots.
//!
//! A [`BlockedInterval`] is either a block the provider created or the slot
//! an existing appointment occupies. The scheduling service owns them; this
//! module only reads a snapshot and never mutates it.
//!
//! Occupied ranges are half-open: a candidate equal to an interval's `start`
//! is blocked, one equal to its `end` is free. An interval whose `end` is not
//! after its `start` blocks nothing.

use agenda_core::ProviderId;
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::time_label::TimeLabel;

/// A provider's occupied range on a date: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedInterval {
    /// Provider the block belongs to.
    pub provider_id: ProviderId,
    /// Civil date of the block.
    pub date: Date,
    /// First blocked minute.
    pub start: TimeLabel,
    /// First free minute after the block; `24:00` runs to the end of the day.
    pub end: TimeLabel,
}

impl BlockedInterval {
    /// Return `true` if this interval belongs to `provider_id` on `date`.
    pub fn applies_to(&self, provider_id: ProviderId, date: Date) -> bool {
        self.provider_id == provider_id && self.date == date
    }

    /// Return `true` if `time` falls in `[start, end)`.
    pub fn covers(&self, time: TimeLabel) -> bool {
        self.start <= time && time < self.end
    }
}

/// A candidate booking: provider, date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    /// Requested provider.
    pub provider_id: ProviderId,
    /// Requested date.
    pub date: Date,
    /// Requested time.
    pub time: TimeLabel,
}

/// Return `true` unless some interval of the same provider and date covers
/// the candidate's time.
pub fn is_available(candidate: &SlotRequest, blocked: &[BlockedInterval]) -> bool {
    !blocked.iter().any(|b| {
        b.applies_to(candidate.provider_id, candidate.date) && b.covers(candidate.time)
    })
}

/// Narrow `all` to the intervals of `provider_id` on `date`, keeping their
/// original order.
pub fn filter_blocked_for_date(
    all: &[BlockedInterval],
    provider_id: ProviderId,
    date: Date,
) -> Vec<BlockedInterval> {
    all.iter()
        .filter(|b| b.applies_to(provider_id, date))
        .copied()
        .collect()
}

/// The candidate `slots` that remain bookable for `provider_id` on `date`.
pub fn selectable_slots(
    slots: &[TimeLabel],
    provider_id: ProviderId,
    date: Date,
    blocked: &[BlockedInterval],
) -> Vec<TimeLabel> {
    let relevant = filter_blocked_for_date(blocked, provider_id, date);
    slots
        .iter()
        .copied()
        .filter(|&time| {
            is_available(
                &SlotRequest {
                    provider_id,
                    date,
                    time,
                },
                &relevant,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeLabel {
        s.parse().unwrap()
    }

    fn block(provider_id: ProviderId, date: &str, start: &str, end: &str) -> BlockedInterval {
        BlockedInterval {
            provider_id,
            date: date.parse().unwrap(),
            start: t(start),
            end: t(end),
        }
    }

    fn request(provider_id: ProviderId, date: &str, time: &str) -> SlotRequest {
        SlotRequest {
            provider_id,
            date: date.parse().unwrap(),
            time: t(time),
        }
    }

    #[test]
    fn half_open_boundaries() {
        let blocked = [block(1, "2025-10-10", "08:00", "09:00")];
        assert!(!is_available(&request(1, "2025-10-10", "08:00"), &blocked));
        assert!(!is_available(&request(1, "2025-10-10", "08:59"), &blocked));
        assert!(is_available(&request(1, "2025-10-10", "09:00"), &blocked));
        assert!(is_available(&request(1, "2025-10-10", "07:59"), &blocked));
    }

    #[test]
    fn other_provider_and_date_unaffected() {
        let blocked = [block(1, "2025-10-10", "08:00", "09:00")];
        assert!(is_available(&request(2, "2025-10-10", "08:00"), &blocked));
        assert!(is_available(&request(1, "2025-10-11", "08:00"), &blocked));
    }

    #[test]
    fn end_of_day_block_covers_last_minute() {
        let blocked = [block(1, "2025-10-10", "23:00", "24:00")];
        assert!(!is_available(&request(1, "2025-10-10", "23:59"), &blocked));
        let open_ended = [block(1, "2025-10-10", "23:00", "23:59")];
        assert!(is_available(&request(1, "2025-10-10", "23:59"), &open_ended));
    }

    #[test]
    fn empty_snapshot_is_available() {
        assert!(is_available(&request(1, "2025-10-10", "08:00"), &[]));
    }

    #[test]
    fn degenerate_interval_blocks_nothing() {
        let blocked = [
            block(1, "2025-10-10", "10:00", "10:00"),
            block(1, "2025-10-10", "11:00", "10:30"),
        ];
        assert!(is_available(&request(1, "2025-10-10", "10:00"), &blocked));
        assert!(is_available(&request(1, "2025-10-10", "10:45"), &blocked));
    }

    #[test]
    fn filter_keeps_order() {
        let all = [
            block(1, "2025-10-10", "14:00", "15:00"),
            block(1, "2025-10-11", "08:00", "09:00"),
            block(2, "2025-10-10", "08:00", "09:00"),
            block(1, "2025-10-10", "08:00", "09:00"),
        ];
        let date = "2025-10-10".parse().unwrap();
        let filtered = filter_blocked_for_date(&all, 1, date);
        assert_eq!(filtered, vec![all[0], all[3]]);
        assert_eq!(filter_blocked_for_date(&filtered, 1, date), filtered);
    }

    #[test]
    fn selectable_prunes_blocked() {
        let slots = [t("08:00"), t("08:30"), t("09:00"), t("09:30")];
        let blocked = [
            block(1, "2025-10-10", "08:30", "09:30"),
            block(2, "2025-10-10", "08:00", "10:00"),
        ];
        let free = selectable_slots(&slots, 1, "2025-10-10".parse().unwrap(), &blocked);
        assert_eq!(free, vec![t("08:00"), t("09:30")]);
    }

    #[test]
    fn interval_deserializes_from_api_shape() {
        let json = r#"{"providerId":7,"date":"2025-10-10","start":"08:00:00","end":"09:00:00"}"#;
        let b: BlockedInterval = serde_json::from_str(json).unwrap();
        assert_eq!(b, block(7, "2025-10-10", "08:00", "09:00"));
    }
}
