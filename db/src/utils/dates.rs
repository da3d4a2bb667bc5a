use chrono::prelude::*;
use chrono::Duration;

pub struct DateBuilder {
    date: NaiveDateTime,
}

pub fn now() -> DateBuilder {
    DateBuilder {
        date: Utc::now().naive_utc(),
    }
}

impl DateBuilder {
    pub fn add_days(self, days: i64) -> DateBuilder {
        DateBuilder {
            date: self.date + Duration::days(days),
        }
    }

    pub fn add_hours(self, hours: i64) -> DateBuilder {
        DateBuilder {
            date: self.date + Duration::hours(hours),
        }
    }

    pub fn add_minutes(self, minutes: i64) -> DateBuilder {
        DateBuilder {
            date: self.date + Duration::minutes(minutes),
        }
    }

    pub fn add_seconds(self, seconds: i64) -> DateBuilder {
        DateBuilder {
            date: self.date + Duration::seconds(seconds),
        }
    }

    pub fn finish(self) -> NaiveDateTime {
        self.date
    }
}

/// Renders a timestamp relative to `now` for dashboard display.
/// Timestamps in the future collapse to "just now" rather than counting
/// backwards.
pub fn time_ago_in_words(from: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (now - from).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (count, unit) = if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else if seconds < 2_592_000 {
        (seconds / 86_400, "day")
    } else if seconds < 31_536_000 {
        (seconds / 2_592_000, "month")
    } else {
        (seconds / 31_536_000, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
