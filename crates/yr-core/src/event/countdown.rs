use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

/// Time left until the event starts, as shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// True once the start time has passed; all components are then zero.
    pub started: bool,
}

impl Countdown {
    pub fn until<Tz: TimeZone>(starts_at: DateTime<FixedOffset>, now: DateTime<Tz>) -> Self {
        let remaining = starts_at.signed_duration_since(now);
        if remaining.num_seconds() <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                started: true,
            };
        }

        let total = remaining.num_seconds();
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            started: false,
        }
    }
}
