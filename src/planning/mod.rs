pub mod history;
pub mod models;
pub mod response;
pub mod sample;

pub use history::{HistoryEntry, HistoryEntryKind};
pub use models::{DaySchedule, EmployeeWeekSchedule, ShiftData, WeekPlanning, Weekday};
pub use response::{HistoryResponse, PlanningResponse};
