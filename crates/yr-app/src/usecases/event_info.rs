//! Informational page use cases: event details and the home page countdown.

use std::sync::Arc;

use yr_core::event::{Countdown, EventInfo};
use yr_core::ports::ClockPort;

/// Use case for the contact / hotel info pages.
pub struct GetEventInfo {
    event: Arc<EventInfo>,
}

impl GetEventInfo {
    pub fn new(event: Arc<EventInfo>) -> Self {
        Self { event }
    }

    /// Event details with days sorted ascending.
    pub fn execute(&self) -> EventInfo {
        let mut info = (*self.event).clone();
        info.days = self.event.sorted_days();
        info
    }
}

/// Use case for the home page countdown.
///
/// Reads the fixed start time and the clock; never touches the draft.
pub struct GetCountdown {
    clock: Arc<dyn ClockPort>,
    event: Arc<EventInfo>,
}

impl GetCountdown {
    pub fn new(clock: Arc<dyn ClockPort>, event: Arc<EventInfo>) -> Self {
        Self { clock, event }
    }

    pub fn execute(&self) -> Countdown {
        Countdown::until(self.event.starts_at, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use yr_core::event::{ContactInfo, EventDay};

    struct FixedClock(DateTime<Utc>);

    impl ClockPort for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn event() -> Arc<EventInfo> {
        Arc::new(EventInfo {
            id: "yatra-2026".into(),
            name: "Winter Yatra".into(),
            starts_at: DateTime::parse_from_rfc3339("2026-12-20T00:00:00+00:00").unwrap(),
            days: vec![
                EventDay {
                    id: "b".into(),
                    date: NaiveDate::from_ymd_opt(2026, 12, 21).unwrap(),
                },
                EventDay {
                    id: "a".into(),
                    date: NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
                },
            ],
            contact: ContactInfo::default(),
            hotels: Vec::new(),
        })
    }

    #[test]
    fn countdown_uses_clock() {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 12, 18, 12, 0, 0).unwrap(),
        ));

        let countdown = GetCountdown::new(clock, event()).execute();

        assert_eq!((countdown.days, countdown.hours), (1, 12));
        assert!(!countdown.started);
    }

    #[test]
    fn event_info_lists_days_in_order() {
        let info = GetEventInfo::new(event()).execute();

        let ids: Vec<_> = info.days.iter().map(|day| day.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
