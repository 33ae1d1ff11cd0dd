//! Human-readable labels for due dates and times.

use chrono::{Days, Local, NaiveDate, NaiveTime};

/// Label for a due date: "Today", "Tomorrow", or an abbreviated month-day
/// like "Aug 25", relative to the current local day.
pub fn due_date_label(date: NaiveDate) -> String {
    due_date_label_on(date, Local::now().date_naive())
}

pub fn due_date_label_on(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if date == today + Days::new(1) {
        return "Tomorrow".to_string();
    }
    date.format("%b %-d").to_string()
}

/// Clock label for a due time, hours and minutes only.
pub fn due_time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
