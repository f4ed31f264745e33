//! End-to-end registration runs against a mock registration service.

use mockito::{Matcher, Server};
use serde_json::json;
use yatra_registration_lib::answers::RegistrationAnswers;
use yatra_registration_lib::bootstrap::AppRuntime;
use yatra_registration_lib::cli::{self, Commands, Outcome};
use yr_core::config::AppConfig;

fn config_for(base_url: &str) -> AppConfig {
    AppConfig::from_toml_str(&format!(
        r#"
        [api]
        base_url = "{base_url}"
        timeout_secs = 5

        [event]
        id = "yatra-2026"
        name = "Winter Yatra"
        starts_at = "2026-12-20T05:00:00+05:30"

        [[event.days]]
        id = "day-2"
        date = "2026-12-21"

        [[event.days]]
        id = "day-1"
        date = "2026-12-20"

        [[hotels]]
        name = "Guest House"
        address = "Station Road"
        "#
    ))
    .unwrap()
}

fn group_answers(second_member_age: i32) -> RegistrationAnswers {
    RegistrationAnswers::from_json_str(
        &json!({
            "registration_type": "group",
            "participants": [
                {
                    "name": "Asha Rao",
                    "email": "asha@example.org",
                    "phone": "+919876543210",
                    "city": "Pune",
                    "age": 75,
                    "gender": "F",
                    "language": "Marathi"
                },
                {
                    "name": "Vikram Rao",
                    "email": "vikram@example.org",
                    "phone": "9876543211",
                    "city": "Pune",
                    "age": second_member_age,
                    "gender": "M",
                    "language": "Hindi"
                }
            ],
            "days": {
                "2026-12-20": { "attending": true, "toilet_preference": "western" },
                "2026-12-21": { "attending": false }
            },
            "transport_type": "private",
            "vehicle": { "has_empty_seats": true, "available_seats": 2 }
        })
        .to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn submit_posts_projected_payload_and_returns_confirmation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/registrations/")
        .match_body(Matcher::PartialJson(json!({
            "event_id": "yatra-2026",
            "registration_type": "group",
            "number_of_members": 2,
            "transportation_mode": "private",
            "has_empty_seats": true,
            "available_seats_count": 2,
            "members": [
                { "name": "Asha Rao", "floor_preference": "Ground", "status": "registered" },
                { "name": "Vikram Rao", "floor_preference": "Any", "status": "registered" }
            ],
            "daily_preferences": [
                { "event_day_id": "day-1", "toilet_preference": "western" }
            ]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "members": [
                    { "id": 1, "name": "Asha Rao", "status": "registered" },
                    { "id": "m-2", "name": "Vikram Rao", "status": "waiting" }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let outcome = cli::submit(&runtime, &group_answers(40)).await.unwrap();

    mock.assert_async().await;
    let Outcome::Done(report) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    assert_eq!(report["members"][1]["id"], "m-2");
    assert_eq!(report["members"][1]["status"], "waiting");

    let orchestrator = runtime.usecases().wizard_orchestrator();
    let draft = orchestrator.draft().await;
    assert_eq!(draft.participants.len(), 1);
    assert!(draft.registration_response.is_none());
}

#[tokio::test]
async fn rejected_submission_keeps_the_draft_and_reports_the_reason() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/registrations/")
        .with_status(409)
        .with_body(r#"{"detail":"Registration is closed"}"#)
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let outcome = cli::submit(&runtime, &group_answers(40)).await.unwrap();

    let Outcome::Failed { report, reason } = outcome else {
        panic!("expected failure");
    };
    assert!(reason.contains("Registration is closed"));
    assert_eq!(report["step"]["screen"], "vehicle");
    assert_eq!(report["notice"]["kind"], "submission_failed");
    let draft = runtime.usecases().wizard_orchestrator().draft().await;
    assert_eq!(draft.participants.len(), 2);
}

#[tokio::test]
async fn rejected_submission_can_be_retried_on_the_same_runtime() {
    let mut server = Server::new_async().await;
    let unavailable = server
        .mock("POST", "/api/registrations/")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();
    let answers = group_answers(40);

    let first = cli::submit(&runtime, &answers).await.unwrap();
    assert!(matches!(first, Outcome::Failed { .. }), "got {first:?}");
    unavailable.assert_async().await;
    unavailable.remove_async().await;

    let accepted = server
        .mock("POST", "/api/registrations/")
        .match_body(Matcher::PartialJson(json!({ "number_of_members": 2 })))
        .with_status(201)
        .with_body(r#"{"members":[{"id":1,"name":"Asha Rao","status":"registered"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let second = cli::submit(&runtime, &answers).await.unwrap();

    accepted.assert_async().await;
    let Outcome::Done(report) = second else {
        panic!("expected confirmation on retry, got {second:?}");
    };
    assert_eq!(report["members"][0]["name"], "Asha Rao");
}

#[tokio::test]
async fn second_registration_after_confirmation_starts_from_the_first_step() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/registrations/")
        .with_status(201)
        .with_body(r#"{"members":[{"id":1,"name":"Asha Rao","status":"registered"}]}"#)
        .expect(2)
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let first = cli::submit(&runtime, &group_answers(40)).await.unwrap();
    let second = cli::submit(&runtime, &group_answers(52)).await.unwrap();

    mock.assert_async().await;
    assert!(matches!(first, Outcome::Done(_)), "got {first:?}");
    assert!(matches!(second, Outcome::Done(_)), "got {second:?}");
}

#[tokio::test]
async fn validate_after_a_rejected_submission_sees_the_same_answers() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/registrations/")
        .with_status(503)
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();
    let answers = group_answers(40);
    cli::submit(&runtime, &answers).await.unwrap();

    let outcome = cli::validate(&runtime, &answers).await.unwrap();

    let Outcome::Done(report) = outcome else {
        panic!("expected clean validation, got {outcome:?}");
    };
    assert_eq!(report["step"]["screen"], "vehicle");
    assert!(report["notice"].is_null());
}

#[tokio::test]
async fn validate_reports_participant_errors_without_calling_the_service() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let outcome = cli::validate(&runtime, &group_answers(0)).await.unwrap();

    mock.assert_async().await;
    let Outcome::Failed { report, .. } = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(report["step"]["screen"], "type_and_personal");
    let second = &report["step"]["participants"][1];
    assert_eq!(second["is_open"], true);
    assert_eq!(second["errors"]["age"], "Age must be between 1 and 120");
}

#[tokio::test]
async fn validate_passes_complete_answers() {
    let server = Server::new_async().await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let outcome = cli::validate(&runtime, &group_answers(40)).await.unwrap();

    let Outcome::Done(report) = outcome else {
        panic!("expected clean validation");
    };
    assert_eq!(report["step"]["screen"], "vehicle");
    assert_eq!(report["step"]["available_seats"], 2);
}

#[tokio::test]
async fn info_lists_days_in_date_order() {
    let server = Server::new_async().await;
    let runtime = AppRuntime::new(&config_for(&server.url())).unwrap();

    let Outcome::Done(report) = cli::execute(&runtime, Commands::Info).await.unwrap() else {
        panic!("info never fails");
    };

    assert_eq!(report["days"][0]["id"], "day-1");
    assert_eq!(report["days"][1]["id"], "day-2");
    assert_eq!(report["hotels"][0]["name"], "Guest House");
}
