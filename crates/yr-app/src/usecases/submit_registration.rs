use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use yr_core::event::EventInfo;
use yr_core::ports::{RegistrationSubmissionPort, SubmissionError};
use yr_core::registration::{
    build_submission_payload, PayloadError, RegistrationDraft, RegistrationResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum SubmitRegistrationError {
    #[error("draft is not ready for submission: {0}")]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Use case for sending a finished draft to the registration service.
///
/// Projects the draft into the wire payload and calls the submission port.
/// The draft itself is never modified here.
pub struct SubmitRegistration {
    submission: Arc<dyn RegistrationSubmissionPort>,
    event: Arc<EventInfo>,
}

impl SubmitRegistration {
    pub fn new(submission: Arc<dyn RegistrationSubmissionPort>, event: Arc<EventInfo>) -> Self {
        Self { submission, event }
    }

    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegistrationResponse, SubmitRegistrationError> {
        let span = info_span!(
            "usecase.submit_registration.execute",
            event_id = %self.event.id,
            members = draft.participants.len(),
        );
        async {
            let payload = build_submission_payload(draft, &self.event)?;
            match self.submission.submit(&payload).await {
                Ok(response) => {
                    info!(
                        members = response.members.len(),
                        "registration accepted"
                    );
                    Ok(response)
                }
                Err(err) => {
                    warn!(error = %err, "registration submission failed");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::DateTime;
    use mockall::mock;
    use yr_core::event::ContactInfo;
    use yr_core::registration::{
        Gender, MemberId, MemberStatus, Participant, RegisteredMember, SubmissionPayload,
        TransportType,
    };

    mock! {
        pub Submission {}

        #[async_trait]
        impl RegistrationSubmissionPort for Submission {
            async fn submit(
                &self,
                payload: &SubmissionPayload,
            ) -> Result<RegistrationResponse, SubmissionError>;
        }
    }

    fn event() -> Arc<EventInfo> {
        Arc::new(EventInfo {
            id: "yatra-2026".into(),
            name: "Winter Yatra".into(),
            starts_at: DateTime::parse_from_rfc3339("2026-12-20T05:00:00+05:30").unwrap(),
            days: Vec::new(),
            contact: ContactInfo::default(),
            hotels: Vec::new(),
        })
    }

    fn ready_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::initial();
        draft.participants = vec![Participant {
            name: "Nandini".into(),
            email: "nandini@example.org".into(),
            phone: "9876543210".into(),
            city: "Mysuru".into(),
            age: Some(29),
            gender: Some(Gender::F),
            language: "Kannada".into(),
            special_requirements: None,
        }];
        draft.transport_type = Some(TransportType::Public);
        draft
    }

    #[tokio::test]
    async fn submits_projected_payload() {
        let mut port = MockSubmission::new();
        port.expect_submit()
            .withf(|payload| payload.event_id == "yatra-2026" && payload.number_of_members == 1)
            .times(1)
            .returning(|payload| {
                Ok(RegistrationResponse {
                    members: vec![RegisteredMember {
                        id: MemberId::Number(7),
                        name: payload.members[0].name.clone(),
                        status: MemberStatus::Registered,
                    }],
                })
            });
        let use_case = SubmitRegistration::new(Arc::new(port), event());

        let response = use_case.execute(&ready_draft()).await.unwrap();

        assert_eq!(response.members[0].name, "Nandini");
    }

    #[tokio::test]
    async fn incomplete_draft_never_reaches_the_port() {
        let mut port = MockSubmission::new();
        port.expect_submit().times(0);
        let use_case = SubmitRegistration::new(Arc::new(port), event());

        let err = use_case
            .execute(&RegistrationDraft::initial())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitRegistrationError::Payload(_)));
    }

    #[tokio::test]
    async fn rejection_is_passed_through() {
        let mut port = MockSubmission::new();
        port.expect_submit().times(1).returning(|_| {
            Err(SubmissionError::Rejected {
                status: 409,
                message: "already registered".into(),
            })
        });
        let use_case = SubmitRegistration::new(Arc::new(port), event());

        let err = use_case.execute(&ready_draft()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "registration rejected with status 409: already registered"
        );
    }
}
