use serde::Serialize;

use crate::planning::models::{ShiftData, WeekPlanning};
use crate::utils::time::{week_date_range, WeekDates};

/// Weekly totals for one employee row.
///
/// Hours stay full precision here; rounding to one decimal happens only
/// when formatting for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub name: String,
    pub hours: f64,
    pub meals: u32,
}

/// Display-ready summary of a week's planning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub week_number: u32,
    pub year: i32,
    pub dates: WeekDates,
    pub rows: Vec<EmployeeSummary>,
}

impl WeekSummary {
    /// Compute per-employee totals for a planning, in display order
    pub fn from_planning(planning: &WeekPlanning) -> Self {
        Self {
            week_number: planning.week_number,
            year: planning.year,
            dates: week_date_range(planning.week_number, planning.year),
            rows: planning
                .employees
                .iter()
                .map(|employee| EmployeeSummary {
                    name: employee.name.clone(),
                    hours: employee.weekly_hours(),
                    meals: employee.weekly_meals(),
                })
                .collect(),
        }
    }

    /// Title line, e.g. "Semaine 3 du 13/01/2025 au 19/01/2025"
    pub fn title(&self) -> String {
        format!(
            "Semaine {} du {} au {}",
            self.week_number, self.dates.start, self.dates.end
        )
    }
}

/// Hours rounded to one decimal for display
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Table cell for a shift: its time range, or a dash when not worked
pub fn shift_cell(shift: &ShiftData) -> String {
    let range = shift.time_range();
    if range.is_empty() {
        String::from("-")
    } else {
        range
    }
}

/// Table cell for a meal count: a dash when zero
pub fn meals_cell(meals: u32) -> String {
    if meals == 0 {
        String::from("-")
    } else {
        meals.to_string()
    }
}
