//! Per-step view models.
//!
//! Stateless projections of the wizard session into plain data. A rendering
//! surface draws these and calls back into the orchestrator for every edit;
//! nothing here writes to the draft.

mod confirmation;
mod personal;
mod preferences;
mod vehicle;

pub use confirmation::ConfirmationView;
pub use personal::{ParticipantCard, PersonalStepView};
pub use preferences::PreferencesStepView;
pub use vehicle::VehicleStepView;

use serde::Serialize;
use yr_core::event::EventInfo;
use yr_core::wizard::WizardState;

use crate::usecases::wizard::{Notice, WizardSession};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum StepView {
    TypeAndPersonal(PersonalStepView),
    Preferences(PreferencesStepView),
    Vehicle(VehicleStepView),
    Confirmation(ConfirmationView),
}

/// What the rendering surface needs for the current screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
    pub step_index: usize,
    pub step: StepView,
    pub can_go_back: bool,
    /// A submission is in flight; the submit control must be disabled.
    pub busy: bool,
    pub notice: Option<Notice>,
}

pub fn render_wizard(session: &WizardSession, event: &EventInfo, busy: bool) -> WizardView {
    let step = match &session.state {
        WizardState::TypeAndPersonal => StepView::TypeAndPersonal(personal::render(session)),
        WizardState::Preferences { day_index } => {
            StepView::Preferences(preferences::render(session, event, *day_index))
        }
        WizardState::Vehicle => StepView::Vehicle(vehicle::render(session, busy)),
        WizardState::Submitted => {
            StepView::Confirmation(confirmation::render(session.store.draft()))
        }
    };

    WizardView {
        step_index: session.state.step_index(),
        step,
        can_go_back: matches!(
            session.state,
            WizardState::Preferences { .. } | WizardState::Vehicle
        ),
        busy,
        notice: session.notice.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};
    use yr_core::event::ContactInfo;
    use yr_core::registration::DraftStore;

    fn event() -> EventInfo {
        EventInfo {
            id: "yatra".into(),
            name: "Winter Yatra".into(),
            starts_at: DateTime::parse_from_rfc3339("2026-12-20T05:00:00+05:30").unwrap(),
            days: Vec::new(),
            contact: ContactInfo::default(),
            hotels: Vec::new(),
        }
    }

    #[test]
    fn first_step_cannot_go_back() {
        let session = WizardSession::new(DraftStore::new(Vec::<NaiveDate>::new()));

        let view = render_wizard(&session, &event(), false);

        assert_eq!(view.step_index, 0);
        assert!(!view.can_go_back);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["step"]["screen"], "type_and_personal");
    }

    #[test]
    fn vehicle_step_reports_busy_submit() {
        let mut session = WizardSession::new(DraftStore::new(Vec::<NaiveDate>::new()));
        session.state = WizardState::Vehicle;

        let view = render_wizard(&session, &event(), true);

        assert_eq!(view.step_index, 2);
        assert!(view.can_go_back);
        assert!(view.busy);
        let StepView::Vehicle(step) = view.step else {
            panic!("expected vehicle step");
        };
        assert!(!step.submit_enabled);
    }
}
