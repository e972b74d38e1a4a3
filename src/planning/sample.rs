use super::models::{DaySchedule, EmployeeWeekSchedule, ShiftData, WeekPlanning, Weekday};
use crate::utils::time::parse_time_range;

/// Shift from a compact cell like "10:30-15:00"; "-" means not worked.
/// Every worked shift serves one staff meal.
fn shift(cell: &str) -> ShiftData {
    match parse_time_range(cell) {
        Some((start, end)) => ShiftData::new(start, end, 1),
        None => ShiftData::default(),
    }
}

/// Build one employee's week from (afternoon, evening) cells, Monday first
fn employee(name: &str, week: [(&str, &str); 7]) -> EmployeeWeekSchedule {
    let mut schedule = EmployeeWeekSchedule::new(name);
    for (weekday, (afternoon, evening)) in Weekday::ALL.iter().copied().zip(week) {
        schedule.set_day(weekday, DaySchedule::new(shift(afternoon), shift(evening)));
    }
    schedule
}

/// A realistic week of restaurant service, usable as demo data and in tests
pub fn sample_week_planning() -> WeekPlanning {
    let mut planning = WeekPlanning::new(3, 2025);
    planning.employees = vec![
        employee(
            "DACKO David",
            [
                ("10:30-15:30", "-"),
                ("-", "10:30-15:30"),
                ("10:30-15:00", "-"),
                ("-", "-"),
                ("-", "-"),
                ("-", "17:30-00:00"),
                ("-", "-"),
            ],
        ),
        employee(
            "LI Huiha",
            [
                ("10:30-15:00", "17:30-23:00"),
                ("10:30-15:00", "17:30-23:00"),
                ("10:30-15:00", "17:30-23:00"),
                ("10:30-15:00", "17:30-23:00"),
                ("10:30-15:00", "-"),
                ("10:30-15:00", "18:00-00:00"),
                ("10:30-15:00", "-"),
            ],
        ),
        employee(
            "TENZIN Sangpo",
            [
                ("-", "-"),
                ("10:00-15:30", "18:30-21:00"),
                ("10:00-15:00", "18:30-21:00"),
                ("10:00-15:00", "18:30-21:00"),
                ("10:00-15:00", "18:30-21:00"),
                ("10:30-15:00", "-"),
                ("17:30-23:00", "-"),
            ],
        ),
        employee(
            "THIRUCHELVAM Poobalapillai",
            [
                ("08:00-10:00", "15:30-17:30"),
                ("08:00-10:00", "15:30-17:00"),
                ("08:00-10:00", "15:30-17:30"),
                ("08:00-10:00", "15:30-17:30"),
                ("08:00-10:00", "15:30-17:30"),
                ("08:00-10:00", "15:30-17:30"),
                ("-", "-"),
            ],
        ),
        employee(
            "SHEN Qinqin",
            [
                ("10:30-14:30", "17:30-22:30"),
                ("-", "17:30-23:00"),
                ("10:30-14:30", "17:30-22:30"),
                ("-", "-"),
                ("-", "-"),
                ("10:30-15:30", "18:30-23:30"),
                ("-", "-"),
            ],
        ),
    ];
    planning
}
