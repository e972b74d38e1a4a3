use semainier::planning::models::{
    DaySchedule, EmployeeWeekSchedule, ShiftData, WeekPlanning, Weekday,
};
use semainier::planning::sample::sample_week_planning;
use semainier::summary::WeekSummary;

/// The employee wire format keeps one named JSON field per weekday
#[test]
fn test_employee_wire_shape() {
    let mut schedule = EmployeeWeekSchedule::new("FATY Kalilou");
    schedule.set_day(
        Weekday::Monday,
        DaySchedule::new(
            ShiftData::new("10:30", "14:30", 1),
            ShiftData::new("18:00", "23:00", 1),
        ),
    );

    let value = serde_json::to_value(&schedule).unwrap();

    assert_eq!(value["name"], "FATY Kalilou");
    for key in [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ] {
        assert!(value.get(key).is_some(), "missing day field {}", key);
    }
    assert_eq!(value["monday"]["afternoon"]["start_time"], "10:30");
    assert_eq!(value["monday"]["afternoon"]["meals"], 1);
    assert_eq!(value["tuesday"]["evening"]["start_time"], "");
}

/// A planning round-trips through JSON without losing employee order
#[test]
fn test_planning_round_trip_preserves_order() {
    let planning = sample_week_planning();
    let json = serde_json::to_string(&planning).unwrap();
    let back: WeekPlanning = serde_json::from_str(&json).unwrap();

    assert_eq!(back, planning);
    let names: Vec<&str> = back.employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "DACKO David",
            "LI Huiha",
            "TENZIN Sangpo",
            "THIRUCHELVAM Poobalapillai",
            "SHEN Qinqin",
        ]
    );
}

/// Day fields omitted from the JSON default to empty schedules
#[test]
fn test_partial_employee_json_defaults() {
    let json = r#"{
        "name": "PEJA Naima",
        "monday": {
            "afternoon": {"start_time": "10:30", "end_time": "15:00", "meals": 1},
            "evening": {"start_time": "", "end_time": "", "meals": 0}
        }
    }"#;

    let schedule: EmployeeWeekSchedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.day(Weekday::Monday).total_hours(), 4.5);
    assert_eq!(schedule.day(Weekday::Tuesday).total_hours(), 0.0);
    assert_eq!(schedule.weekly_hours(), 4.5);
    assert_eq!(schedule.weekly_meals(), 1);
}

/// Weekly totals of the sample planning match hand-computed values,
/// including the overnight shifts ending at midnight
#[test]
fn test_sample_planning_totals() {
    let planning = sample_week_planning();
    let summary = WeekSummary::from_planning(&planning);

    let expected = [
        ("DACKO David", 21.0, 4),
        ("LI Huiha", 59.5, 12),
        ("TENZIN Sangpo", 40.5, 10),
        ("THIRUCHELVAM Poobalapillai", 23.5, 12),
        ("SHEN Qinqin", 33.5, 7),
    ];

    assert_eq!(summary.rows.len(), expected.len());
    for (row, (name, hours, meals)) in summary.rows.iter().zip(expected) {
        assert_eq!(row.name, name);
        assert_eq!(row.hours, hours, "hours mismatch for {}", name);
        assert_eq!(row.meals, meals, "meals mismatch for {}", name);
    }

    assert_eq!(summary.title(), "Semaine 3 du 13/01/2025 au 19/01/2025");
}

/// Aggregation functions are pure: repeated calls on the same planning
/// yield identical results and never mutate their input
#[test]
fn test_aggregation_is_idempotent() {
    let planning = sample_week_planning();
    let before = planning.clone();

    let first = WeekSummary::from_planning(&planning);
    let second = WeekSummary::from_planning(&planning);

    assert_eq!(first, second);
    assert_eq!(planning, before);
}
