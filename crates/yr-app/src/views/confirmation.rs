use serde::Serialize;
use yr_core::registration::{RegisteredMember, RegistrationDraft, RegistrationResponse};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationView {
    pub members: Vec<RegisteredMember>,
}

impl From<RegistrationResponse> for ConfirmationView {
    fn from(response: RegistrationResponse) -> Self {
        Self {
            members: response.members,
        }
    }
}

pub(super) fn render(draft: &RegistrationDraft) -> ConfirmationView {
    draft
        .registration_response
        .clone()
        .map(ConfirmationView::from)
        .unwrap_or(ConfirmationView {
            members: Vec::new(),
        })
}
