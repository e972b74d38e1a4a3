use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Normalize a time string to the HH:MM format
pub fn normalize_time(time_str: &str) -> String {
    // Remove any extra whitespace
    let time_str = time_str.trim();

    // Normalize French-style separators ("10H30", "8,30")
    let time_str = time_str.to_uppercase().replace('H', ":").replace(',', ".");

    if time_str.contains(':') {
        // Time already has a colon, just format it properly
        if let Ok(time) = NaiveTime::parse_from_str(&time_str, "%H:%M") {
            return time.format("%H:%M").to_string();
        }
    } else if time_str.contains('.') {
        // Time has a period (e.g., "8.30")
        let parts: Vec<&str> = time_str.split('.').collect();
        if parts.len() == 2 {
            if let (Ok(hours), Ok(minutes)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                if hours < 24 && minutes < 60 {
                    return format!("{:02}:{:02}", hours, minutes);
                }
            }
        }
    } else if let Ok(hours) = time_str.parse::<u32>() {
        // Just a number (e.g., "8"), assume it's hours
        if hours < 24 {
            return format!("{:02}:00", hours);
        }
    }

    // If all parsing fails, return the string as-is
    time_str
}

/// Split a compact range like "10:30-15:00", "10H30-15H30" or "10:30 - 15:00"
/// into normalized start/end times. Empty and dash-only cells mean no shift.
pub fn parse_time_range(range: &str) -> Option<(String, String)> {
    let range = range.trim();
    if range.is_empty() || range == "-" {
        return None;
    }

    let (start, end) = range.split_once('-')?;
    let start = normalize_time(start);
    let end = normalize_time(end);
    if parse_time(&start).is_none() || parse_time(&end).is_none() {
        return None;
    }

    Some((start, end))
}

/// Calendar date range of a week, formatted DD/MM/YYYY
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDates {
    pub start: String,
    pub end: String,
}

/// Monday of the requested ISO week.
///
/// `week_number` is not validated against the year's actual week count;
/// out-of-range weeks roll arithmetically into the adjacent year.
fn iso_week_monday(week_number: u32, year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let weekday = i64::from(jan1.weekday().number_from_monday()); // Monday = 1 ... Sunday = 7

    // First Monday of the ISO week calendar (may fall in the prior year)
    let first_monday = if weekday <= 4 {
        jan1.checked_sub_signed(Duration::days(weekday - 1))?
    } else {
        jan1.checked_add_signed(Duration::days(8 - weekday))?
    };

    first_monday.checked_add_signed(Duration::days((i64::from(week_number) - 1) * 7))
}

/// Get the Monday and Sunday dates of an ISO week (Monday to Sunday)
pub fn week_date_range(week_number: u32, year: i32) -> WeekDates {
    let monday = match iso_week_monday(week_number, year) {
        Some(date) => date,
        None => {
            return WeekDates {
                start: String::new(),
                end: String::new(),
            }
        }
    };

    // Sunday of the same week (Monday + 6 days)
    let sunday = monday
        .checked_add_signed(Duration::days(6))
        .unwrap_or(monday);

    WeekDates {
        start: format_date(monday),
        end: format_date(sunday),
    }
}

/// Week number, year and date range of the week after `now`.
///
/// Always resolves to the next Monday; on a Monday this is the following week.
pub fn next_week_info(now: &DateTime<Local>) -> (u32, i32, WeekDates) {
    let today = now.date_naive();

    let mut days_until_monday = (7 - i64::from(today.weekday().num_days_from_monday())) % 7;
    if days_until_monday == 0 {
        days_until_monday = 7;
    }

    let next_monday = today
        .checked_add_signed(Duration::days(days_until_monday))
        .unwrap_or(today);
    let next_sunday = next_monday
        .checked_add_signed(Duration::days(6))
        .unwrap_or(next_monday);

    (
        next_monday.iso_week().week(),
        next_monday.year(),
        WeekDates {
            start: format_date(next_monday),
            end: format_date(next_sunday),
        },
    )
}

/// Format a date as DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
