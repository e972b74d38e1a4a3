use serde::{Deserialize, Serialize};

use crate::utils::time::{parse_time, week_date_range, WeekDates};

/// A calendar weekday, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in display and aggregation order (Monday to Sunday)
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the week, Monday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full French label, as shown on exported documents
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lundi",
            Weekday::Tuesday => "Mardi",
            Weekday::Wednesday => "Mercredi",
            Weekday::Thursday => "Jeudi",
            Weekday::Friday => "Vendredi",
            Weekday::Saturday => "Samedi",
            Weekday::Sunday => "Dimanche",
        }
    }

    /// Short French label, as shown in table headers
    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lun",
            Weekday::Tuesday => "Mar",
            Weekday::Wednesday => "Mer",
            Weekday::Thursday => "Jeu",
            Weekday::Friday => "Ven",
            Weekday::Saturday => "Sam",
            Weekday::Sunday => "Dim",
        }
    }
}

/// A single service-period shift: start/end times and meals served.
///
/// Empty time strings mean the shift is not worked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftData {
    /// Start time as HH:MM, or empty
    #[serde(default)]
    pub start_time: String,
    /// End time as HH:MM, or empty
    #[serde(default)]
    pub end_time: String,
    /// Number of staff meals served during the shift
    #[serde(default)]
    pub meals: u32,
}

impl ShiftData {
    /// Create a shift with a time range and meal count
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>, meals: u32) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            meals,
        }
    }

    /// Shift duration in hours.
    ///
    /// A missing or unparseable time on either side yields 0: such a shift
    /// is not worked and must not contribute hours.
    pub fn hours(&self) -> f64 {
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return 0.0;
        }

        let start_minutes = match parse_time(&self.start_time) {
            Some((hour, minute)) => i64::from(hour) * 60 + i64::from(minute),
            None => return 0.0,
        };
        let mut end_minutes = match parse_time(&self.end_time) {
            Some((hour, minute)) => i64::from(hour) * 60 + i64::from(minute),
            None => return 0.0,
        };

        // An end before the start means the shift crosses midnight
        // (e.g. 17:30 - 00:00)
        if end_minutes < start_minutes {
            end_minutes += 24 * 60;
        }

        (end_minutes - start_minutes) as f64 / 60.0
    }

    /// Formatted "start - end" range, or empty when either time is missing
    pub fn time_range(&self) -> String {
        if !self.start_time.is_empty() && !self.end_time.is_empty() {
            format!("{} - {}", self.start_time, self.end_time)
        } else {
            String::new()
        }
    }
}

/// One day's two fixed service periods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub afternoon: ShiftData,
    #[serde(default)]
    pub evening: ShiftData,
}

impl DaySchedule {
    /// Create a day schedule from its two service periods
    pub fn new(afternoon: ShiftData, evening: ShiftData) -> Self {
        Self { afternoon, evening }
    }

    /// Hours worked across both service periods
    pub fn total_hours(&self) -> f64 {
        self.afternoon.hours() + self.evening.hours()
    }

    /// Meals served across both service periods
    pub fn total_meals(&self) -> u32 {
        self.afternoon.meals + self.evening.meals
    }
}

/// An employee's roster for one week: exactly seven days, Monday to Sunday.
///
/// Days are addressed by [`Weekday`], not by index; the wire format keeps
/// the seven named `monday`..`sunday` JSON fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "EmployeeWeekScheduleWire", into = "EmployeeWeekScheduleWire")]
pub struct EmployeeWeekSchedule {
    pub name: String,
    days: [DaySchedule; 7],
}

impl EmployeeWeekSchedule {
    /// Create an empty week for an employee
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: Default::default(),
        }
    }

    /// Schedule for one weekday
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.index()]
    }

    /// Replace the schedule for one weekday
    pub fn set_day(&mut self, weekday: Weekday, schedule: DaySchedule) {
        self.days[weekday.index()] = schedule;
    }

    /// Days in calendar order (Monday to Sunday)
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.iter().copied().zip(self.days.iter())
    }

    /// Total hours worked over the week
    pub fn weekly_hours(&self) -> f64 {
        self.days.iter().map(DaySchedule::total_hours).sum()
    }

    /// Total meals served over the week
    pub fn weekly_meals(&self) -> u32 {
        self.days.iter().map(DaySchedule::total_meals).sum()
    }
}

/// Wire representation with one named field per weekday
#[derive(Serialize, Deserialize)]
struct EmployeeWeekScheduleWire {
    name: String,
    #[serde(default)]
    monday: DaySchedule,
    #[serde(default)]
    tuesday: DaySchedule,
    #[serde(default)]
    wednesday: DaySchedule,
    #[serde(default)]
    thursday: DaySchedule,
    #[serde(default)]
    friday: DaySchedule,
    #[serde(default)]
    saturday: DaySchedule,
    #[serde(default)]
    sunday: DaySchedule,
}

impl From<EmployeeWeekScheduleWire> for EmployeeWeekSchedule {
    fn from(wire: EmployeeWeekScheduleWire) -> Self {
        Self {
            name: wire.name,
            days: [
                wire.monday,
                wire.tuesday,
                wire.wednesday,
                wire.thursday,
                wire.friday,
                wire.saturday,
                wire.sunday,
            ],
        }
    }
}

impl From<EmployeeWeekSchedule> for EmployeeWeekScheduleWire {
    fn from(schedule: EmployeeWeekSchedule) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = schedule.days;
        Self {
            name: schedule.name,
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

/// The complete roster for one ISO week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPlanning {
    /// ISO week number, nominally 1-53 (not validated)
    pub week_number: u32,
    pub year: i32,
    /// Employee rows in display order
    #[serde(default)]
    pub employees: Vec<EmployeeWeekSchedule>,
}

impl WeekPlanning {
    /// Create an empty planning for a week
    pub fn new(week_number: u32, year: i32) -> Self {
        Self {
            week_number,
            year,
            employees: Vec::new(),
        }
    }

    /// Find an employee's schedule by name
    pub fn employee(&self, name: &str) -> Option<&EmployeeWeekSchedule> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Calendar dates covered by this planning
    pub fn week_dates(&self) -> WeekDates {
        week_date_range(self.week_number, self.year)
    }
}
