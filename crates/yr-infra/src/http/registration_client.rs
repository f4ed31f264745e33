use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info_span, warn, Instrument};
use yr_core::config::ApiConfig;
use yr_core::ports::{RegistrationSubmissionPort, SubmissionError};
use yr_core::registration::{RegistrationResponse, SubmissionPayload};

/// Longest error body excerpt carried into a rejection message.
const MAX_BODY_EXCERPT: usize = 200;

/// Registration service client: one JSON POST per submission.
pub struct HttpRegistrationClient {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistrationClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            url: config.registration_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RegistrationSubmissionPort for HttpRegistrationClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<RegistrationResponse, SubmissionError> {
        let span = info_span!(
            "infra.http.submit_registration",
            url = %self.url,
            members = payload.number_of_members,
        );
        async {
            let response = self
                .client
                .post(&self.url)
                .json(payload)
                .send()
                .await
                .map_err(map_transport_error)?;

            let status = response.status();
            let body = response.text().await.map_err(map_transport_error)?;
            debug!(status = status.as_u16(), bytes = body.len(), "registration service replied");

            if !status.is_success() {
                let message = rejection_message(status, &body);
                warn!(status = status.as_u16(), %message, "registration rejected");
                return Err(SubmissionError::Rejected {
                    status: status.as_u16(),
                    message,
                });
            }

            serde_json::from_str::<RegistrationResponse>(&body)
                .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))
        }
        .instrument(span)
        .await
    }
}

fn map_transport_error(error: reqwest::Error) -> SubmissionError {
    if error.is_timeout() {
        SubmissionError::Transport("request timed out".to_string())
    } else {
        SubmissionError::Transport(error.to_string())
    }
}

/// Prefers a `detail`/`message`/`error` field from a JSON error body, then a
/// short excerpt of the raw body, then the status reason.
fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["detail", "message", "error"] {
            if let Some(serde_json::Value::String(text)) = fields.get(key) {
                return text.clone();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(MAX_BODY_EXCERPT).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use yr_core::registration::{
        FloorPreference, Gender, MemberId, MemberPayload, MemberStatus, RegistrationType,
        SubmittedMemberStatus, TransportType,
    };

    fn client_for(server: &Server) -> HttpRegistrationClient {
        HttpRegistrationClient::new(&ApiConfig {
            base_url: format!("{}/", server.url()),
            registration_path: "/api/registrations/".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            event_id: "yatra-2026".to_string(),
            registration_type: RegistrationType::Individual,
            number_of_members: 1,
            transportation_mode: TransportType::Public,
            has_empty_seats: false,
            available_seats_count: None,
            members: vec![MemberPayload {
                name: "Asha Rao".to_string(),
                phone_number: "+919876543210".to_string(),
                email: "asha@example.org".to_string(),
                city: "Pune".to_string(),
                age: 75,
                gender: Gender::F,
                language: "Marathi".to_string(),
                floor_preference: FloorPreference::Ground,
                status: SubmittedMemberStatus::Registered,
            }],
            daily_preferences: Vec::new(),
        }
    }

    #[tokio::test]
    async fn posts_payload_and_decodes_members() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/registrations/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "event_id": "yatra-2026",
                "transportation_mode": "public",
                "members": [{ "floor_preference": "Ground", "status": "registered" }],
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"members":[{"id":42,"name":"Asha Rao","status":"waiting"}]}"#)
            .create_async()
            .await;

        let response = client_for(&server).submit(&payload()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.members.len(), 1);
        assert_eq!(response.members[0].id, MemberId::Number(42));
        assert_eq!(response.members[0].status, MemberStatus::Waiting);
    }

    #[tokio::test]
    async fn non_success_status_is_a_rejection_with_detail() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/registrations/")
            .with_status(400)
            .with_body(r#"{"detail":"Registration is closed"}"#)
            .create_async()
            .await;

        let err = client_for(&server).submit(&payload()).await.unwrap_err();

        match err {
            SubmissionError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Registration is closed");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/registrations/")
            .with_status(200)
            .with_body("<html>ok</html>")
            .create_async()
            .await;

        let err = client_for(&server).submit(&payload()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let client = HttpRegistrationClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            registration_path: "/api/registrations/".to_string(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client.submit(&payload()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[test]
    fn rejection_message_falls_back_to_body_then_reason() {
        assert_eq!(
            rejection_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            rejection_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, r#"{"message":"bad seats"}"#),
            "bad seats"
        );
    }
}
