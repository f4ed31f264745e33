use chrono::NaiveDate;
use serde::Serialize;
use yr_core::event::EventInfo;
use yr_core::registration::DayPreference;

use crate::usecases::wizard::WizardSession;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferencesStepView {
    pub day_index: usize,
    pub day_count: usize,
    /// `None` only when the event has no days configured.
    pub date: Option<NaiveDate>,
    pub label: String,
    pub preference: DayPreference,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

pub(super) fn render(
    session: &WizardSession,
    event: &EventInfo,
    day_index: usize,
) -> PreferencesStepView {
    let dates = session.store.event_dates();
    let day_count = dates.len();
    let date = dates.get(day_index).copied();

    let preference = date
        .and_then(|date| session.store.draft().preferences_by_date.get(&date))
        .cloned()
        .unwrap_or_default();

    let label = match date {
        Some(date) => format!(
            "{} - Day {} of {} ({})",
            event.name,
            day_index + 1,
            day_count,
            date.format("%a, %d %b %Y")
        ),
        None => event.name.clone(),
    };

    PreferencesStepView {
        day_index,
        day_count,
        date,
        label,
        preference,
        is_first_day: day_index == 0,
        is_last_day: day_index + 1 >= day_count,
    }
}
