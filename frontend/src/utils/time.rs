use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::current_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Single date when the range is one day, `start ~ end` otherwise.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_date(start)
    } else {
        format!("{} ~ {}", format_date(start), format_date(end))
    }
}
