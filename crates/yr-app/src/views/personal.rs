use serde::Serialize;
use yr_core::registration::{Participant, RegistrationType};
use yr_core::validation::ParticipantErrors;

use crate::usecases::wizard::WizardSession;

/// One collapsible participant panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantCard {
    pub index: usize,
    pub title: String,
    pub participant: Participant,
    pub is_open: bool,
    pub removable: bool,
    pub errors: ParticipantErrors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalStepView {
    pub registration_type: RegistrationType,
    pub participants: Vec<ParticipantCard>,
    /// Only group registrations offer "add member".
    pub can_add_participant: bool,
}

pub(super) fn render(session: &WizardSession) -> PersonalStepView {
    let draft = session.store.draft();
    let count = draft.participants.len();

    let participants = draft
        .participants
        .iter()
        .enumerate()
        .map(|(index, participant)| ParticipantCard {
            index,
            title: if index == 0 {
                "Primary contact".to_string()
            } else {
                format!("Member {}", index + 1)
            },
            participant: participant.clone(),
            is_open: index == session.open_participant,
            removable: index > 0 && count > 1,
            errors: session
                .participant_errors
                .get(&index)
                .cloned()
                .unwrap_or_default(),
        })
        .collect();

    PersonalStepView {
        registration_type: draft.registration_type,
        participants,
        can_add_participant: draft.registration_type == RegistrationType::Group,
    }
}
