//! Integration tests for the availability filter.

use agenda_time::{
    filter_blocked_for_date, generate_slots, is_available, selectable_slots, BlockedInterval, Date,
    SlotRequest, TimeLabel, WorkWindow,
};
use proptest::prelude::*;

fn t(s: &str) -> TimeLabel {
    s.parse().unwrap()
}

fn d(s: &str) -> Date {
    s.parse().unwrap()
}

#[test]
fn blocked_hour_on_october_tenth() {
    let blocked = [BlockedInterval {
        provider_id: 1,
        date: d("2025-10-10"),
        start: t("08:00"),
        end: t("09:00"),
    }];
    let at = |provider_id: u64, time: &str| SlotRequest {
        provider_id,
        date: d("2025-10-10"),
        time: t(time),
    };
    assert!(!is_available(&at(1, "08:00"), &blocked));
    assert!(is_available(&at(1, "09:00"), &blocked));
    assert!(is_available(&at(2, "08:00"), &blocked));
}

#[test]
fn default_day_with_appointments() {
    let date = d("2025-10-13");
    let blocked = [
        BlockedInterval { provider_id: 3, date, start: t("08:00"), end: t("08:30") },
        BlockedInterval { provider_id: 3, date, start: t("12:00"), end: t("14:00") },
        BlockedInterval { provider_id: 3, date: d("2025-10-14"), start: t("08:00"), end: t("18:30") },
    ];
    let slots = generate_slots(&WorkWindow::default());
    let free = selectable_slots(&slots, 3, date, &blocked);
    assert_eq!(free.len(), slots.len() - 5);
    assert_eq!(free.first(), Some(&t("08:30")));
    assert!(!free.contains(&t("12:00")));
    assert!(!free.contains(&t("13:30")));
    assert!(free.contains(&t("14:00")));
}

fn any_interval() -> impl Strategy<Value = BlockedInterval> {
    (1u64..=3, 0i32..3, 0u32..1440, 0u32..1440).prop_map(|(provider_id, day, a, b)| {
        BlockedInterval {
            provider_id,
            date: Date::from_ymd(2025, 10, 10).unwrap().add_days(day).unwrap(),
            start: TimeLabel::from_minutes(a.min(b)).unwrap(),
            end: TimeLabel::from_minutes(a.max(b)).unwrap(),
        }
    })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        all in prop::collection::vec(any_interval(), 0..20),
        provider_id in 1u64..=3,
        day in 0i32..3,
    ) {
        let date = Date::from_ymd(2025, 10, 10).unwrap().add_days(day).unwrap();
        let once = filter_blocked_for_date(&all, provider_id, date);
        let twice = filter_blocked_for_date(&once, provider_id, date);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|b| b.provider_id == provider_id && b.date == date));
    }

    #[test]
    fn filtered_snapshot_gives_same_answer(
        all in prop::collection::vec(any_interval(), 0..20),
        provider_id in 1u64..=3,
        day in 0i32..3,
        minute in 0u32..1440,
    ) {
        let date = Date::from_ymd(2025, 10, 10).unwrap().add_days(day).unwrap();
        let candidate = SlotRequest {
            provider_id,
            date,
            time: TimeLabel::from_minutes(minute).unwrap(),
        };
        let narrowed = filter_blocked_for_date(&all, provider_id, date);
        prop_assert_eq!(is_available(&candidate, &all), is_available(&candidate, &narrowed));
    }
}
