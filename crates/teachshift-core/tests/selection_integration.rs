//! Integration tests for shift resolution and teaching job selection.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use teachshift_core::{
    DescriptionParser, DesiredShift, PositionalParser, SelectionError, Session, ShiftCalendar,
    ShiftResolver, TeachingJobSelector, TimestampClassifier,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn at_secs(secs: u32) -> NaiveDateTime {
    day().and_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap())
}

fn hm(h: u32, m: u32) -> u32 {
    h * 3600 + m * 60
}

fn session(job_type: &str, start: &str, description: &str) -> Session {
    Session {
        job_type: job_type.into(),
        start_timestamp: start.into(),
        description: description.into(),
        ..Session::default()
    }
}

#[test]
fn test_full_day_walkthrough() {
    let sessions = vec![
        session("Teaching", "2024-05-10T07:20:00", "ISYS6169001-Database Systems LA05 601 1"),
        session("Casemaking", "2024-05-10T09:20:00", "Case XX00 000 1"),
        session("Teaching", "2024-05-10T09:20:00", "MATH6183001-Scientific Computing BA09 622 1"),
        session("Teaching", "2024-05-10T13:20:00", "COMP6047001-Algorithm and Programming LB01 710 2"),
        session("Teaching", "2024-05-10T17:20:00", "COMP6100001-Software Engineering LC02 503 3"),
        session("Teaching", "2024-05-11T11:20:00", "Tomorrow LA01 100 1"),
    ];
    let selector = TeachingJobSelector::default();

    // before the first shift: shift 1
    let sel = selector.select_next(&sessions, at_secs(hm(6, 30))).unwrap();
    assert_eq!((sel.shift, sel.room.as_str()), (1, "601"));

    // inside shift 1: shift 2, the teaching job (casemaking dropped)
    let sel = selector.select_next(&sessions, at_secs(hm(8, 0))).unwrap();
    assert_eq!(sel.shift, 2);
    assert_eq!(sel.room, "622");
    assert_eq!(sel.job.subject, "MATH6183001-Scientific Computing");
    assert_eq!(sel.job.class, "BA09");

    // inside shift 2: shift 3 has nothing today (tomorrow's 11:20 doesn't count)
    assert_eq!(
        selector.select_next(&sessions, at_secs(hm(10, 0))).unwrap_err(),
        SelectionError::NoMatchingSession { shift: 3 }
    );

    // gap before shift 4
    let sel = selector.select_next(&sessions, at_secs(hm(13, 5))).unwrap();
    assert_eq!((sel.shift, sel.room.as_str()), (4, "710"));

    // inside shift 5: shift 6
    let sel = selector.select_next(&sessions, at_secs(hm(16, 0))).unwrap();
    assert_eq!((sel.shift, sel.room.as_str()), (6, "503"));

    // inside shift 6 and after: nothing left
    for secs in [hm(17, 20), hm(18, 0), hm(19, 0), hm(23, 0)] {
        assert_eq!(
            selector.select_next(&sessions, at_secs(secs)).unwrap_err(),
            SelectionError::NoUpcomingShift
        );
    }
}

#[test]
fn test_selection_serializes_as_next_room_envelope() {
    let sessions = vec![session("Teaching", "2024-05-10T09:20:00", "Networks LB03 702 2")];
    let sel = TeachingJobSelector::default()
        .select_next(&sessions, at_secs(hm(8, 0)))
        .unwrap();
    let json = serde_json::to_value(&sel).unwrap();
    assert_eq!(json["shift"], 2);
    assert_eq!(json["room"], "702");
    assert_eq!(json["job"]["Room"], "702");
    assert_eq!(json["job"]["Class"], "LB03");
    assert_eq!(json["job"]["StartDate"], "2024-05-10T09:20:00");
}

#[test]
fn test_custom_calendar_changes_resolution() {
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    let calendar = ShiftCalendar::new(vec![(t(8, 0), t(10, 0)), (t(10, 0), t(12, 0))]).unwrap();
    let selector = TeachingJobSelector::new(calendar);
    let sessions = vec![session("Teaching", "2024-05-10T10:00:00", "Touching LA01 101 1")];

    let sel = selector.select_next(&sessions, at_secs(hm(9, 0))).unwrap();
    assert_eq!(sel.shift, 2);
    assert_eq!(
        selector.select_next(&sessions, at_secs(hm(10, 0))).unwrap_err(),
        SelectionError::NoUpcomingShift
    );
}

proptest! {
    #[test]
    fn before_first_shift_wants_shift_one(secs in 0..hm(7, 20)) {
        let cal = ShiftCalendar::default();
        prop_assert_eq!(ShiftResolver::new(&cal).desired_shift(at_secs(secs)), DesiredShift::Shift(1));
    }

    #[test]
    fn inside_first_shift_wants_shift_two(secs in hm(7, 20)..hm(9, 0)) {
        let cal = ShiftCalendar::default();
        prop_assert_eq!(ShiftResolver::new(&cal).desired_shift(at_secs(secs)), DesiredShift::Shift(2));
    }

    #[test]
    fn inside_last_shift_wants_nothing(secs in hm(17, 20)..hm(19, 0)) {
        let cal = ShiftCalendar::default();
        prop_assert_eq!(ShiftResolver::new(&cal).desired_shift(at_secs(secs)), DesiredShift::NoneToday);
    }

    #[test]
    fn after_last_shift_wants_nothing(secs in hm(19, 0)..86_400u32) {
        let cal = ShiftCalendar::default();
        prop_assert_eq!(ShiftResolver::new(&cal).desired_shift(at_secs(secs)), DesiredShift::NoneToday);
    }

    #[test]
    fn desired_shift_never_starts_in_the_past(secs in 0..86_400u32) {
        let cal = ShiftCalendar::default();
        let now = at_secs(secs);
        if let DesiredShift::Shift(n) = ShiftResolver::new(&cal).desired_shift(now) {
            let window = cal.window(n).unwrap();
            prop_assert!(window.start_on(now.date()) > now);
        }
    }

    #[test]
    fn classification_is_exact_start_only(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let cal = ShiftCalendar::default();
        let raw = format!("2024-05-10T{h:02}:{m:02}:{s:02}");
        let class = TimestampClassifier::new(&cal).classify(&raw);
        let expected = cal.shift_starting_at(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        prop_assert_eq!(class.shift(), expected);
        prop_assert!(class.time().is_some());
    }

    #[test]
    fn parser_reads_convention_back(
        words in prop::collection::vec("[A-Za-z0-9-]{1,10}", 0..4),
        class_code in "[A-Z]{2}[0-9]{2}",
        room in "[0-9]{3}",
        order in 1u32..20,
    ) {
        let mut description = words.join(" ");
        description.push_str(&format!(" {class_code} {room} {order}"));
        let parsed = PositionalParser.parse(&description);
        prop_assert_eq!(parsed.subject, words.join(" "));
        prop_assert_eq!(parsed.class_code, class_code);
        prop_assert_eq!(parsed.room, room);
    }

    #[test]
    fn parser_never_panics(description in "\\PC{0,60}") {
        let _ = PositionalParser.parse(&description);
    }
}
