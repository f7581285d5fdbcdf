mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{create_test_app, try_test_state};
use moneta_core::services::advisory_desk_service::AdvisoryDeskService;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

async fn book_session(server: &TestServer, user_id: Uuid, advisor_id: Uuid) -> serde_json::Value {
    let response = server
        .post("/sessions")
        .json(&json!({
            "user_id": user_id,
            "advisor_id": advisor_id,
            "session_date": "2026-09-01",
            "session_time": "10:30:00"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn list_sessions(server: &TestServer, user_id: Uuid) -> Vec<serde_json::Value> {
    let response = server
        .get("/sessions")
        .add_query_param("user_id", user_id.to_string())
        .await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    body.as_array().unwrap().clone()
}

async fn create_advisor(server: &TestServer, email: &str) -> serde_json::Value {
    let response = server
        .post("/advisors")
        .json(&json!({
            "name": "Test Advisor",
            "email": email,
            "specialty": "TAX"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
#[serial]
async fn test_book_session_starts_pending() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let user_id = Uuid::new_v4();
    let advisor_id = Uuid::new_v4();
    let body = book_session(&server, user_id, advisor_id).await;

    assert_eq!(body["user_id"], user_id.to_string());
    assert_eq!(body["advisor_id"], advisor_id.to_string());
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["session_date"], "2026-09-01");
    assert_eq!(body["session_time"], "10:30:00");

    let rows = list_sessions(&server, user_id).await;
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_booking_never_checks_the_advisor_exists() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    // the advisors table is empty; the booking still goes through
    let body = book_session(&server, Uuid::new_v4(), Uuid::new_v4()).await;

    assert_eq!(body["status"], "PENDING");
}

#[tokio::test]
#[serial]
async fn test_reschedule_updates_slot_and_status() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let user_id = Uuid::new_v4();
    let booked = book_session(&server, user_id, Uuid::new_v4()).await;
    let session_id = booked["id"].as_str().unwrap();

    let response = server
        .put(&format!("/sessions/{}", session_id))
        .add_query_param("user_id", user_id.to_string())
        .json(&json!({
            "session_date": "2026-09-15",
            "session_time": "14:00:00"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "RESCHEDULED");
    assert_eq!(body["session_date"], "2026-09-15");
    assert_eq!(body["session_time"], "14:00:00");
}

#[tokio::test]
#[serial]
async fn test_reschedule_foreign_session_forbidden() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let owner = Uuid::new_v4();
    let booked = book_session(&server, owner, Uuid::new_v4()).await;
    let session_id = booked["id"].as_str().unwrap();

    let response = server
        .put(&format!("/sessions/{}", session_id))
        .add_query_param("user_id", Uuid::new_v4().to_string())
        .json(&json!({
            "session_date": "2026-09-15",
            "session_time": "14:00:00"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let rows = list_sessions(&server, owner).await;
    assert_eq!(rows[0]["status"], "PENDING");
}

#[tokio::test]
#[serial]
async fn test_reschedule_unknown_session_not_found() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .put(&format!("/sessions/{}", Uuid::new_v4()))
        .add_query_param("user_id", Uuid::new_v4().to_string())
        .json(&json!({
            "session_date": "2026-09-15",
            "session_time": "14:00:00"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_cancel_deletes_the_row_outright() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let user_id = Uuid::new_v4();
    let booked = book_session(&server, user_id, Uuid::new_v4()).await;
    let session_id = Uuid::parse_str(booked["id"].as_str().unwrap()).unwrap();

    let response = server
        .delete(&format!("/sessions/{}", session_id))
        .add_query_param("user_id", user_id.to_string())
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    assert!(list_sessions(&server, user_id).await.is_empty());

    // no CANCELLED row lingers; the record is gone from storage
    let mut conn = state.db.get().unwrap();
    let stored =
        moneta_core::repositories::session_repository::SessionRepository::find_by_id(
            &mut conn, session_id,
        )
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
#[serial]
async fn test_cancel_foreign_session_forbidden() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let owner = Uuid::new_v4();
    let booked = book_session(&server, owner, Uuid::new_v4()).await;
    let session_id = booked["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/sessions/{}", session_id))
        .add_query_param("user_id", Uuid::new_v4().to_string())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(list_sessions(&server, owner).await.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_create_and_list_advisors() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("adv{}@example.com", Uuid::new_v4().simple());
    let body = create_advisor(&server, &email).await;
    assert_eq!(body["specialty"], "TAX");
    assert_eq!(body["email"], email);

    let response = server.get("/advisors").await;
    response.assert_status(StatusCode::OK);
    let advisors: serde_json::Value = response.json();
    assert_eq!(advisors.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_create_advisor_duplicate_email_conflicts() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("dup{}@example.com", Uuid::new_v4().simple());
    create_advisor(&server, &email).await;

    let response = server
        .post("/advisors")
        .json(&json!({
            "name": "Second Advisor",
            "email": email,
            "specialty": "RETIREMENT"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn test_create_advisor_validates_payload() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .post("/advisors")
        .json(&json!({
            "name": "X",
            "email": "not-an-email",
            "specialty": "TAX"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_deleting_advisor_strands_their_sessions() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("gone{}@example.com", Uuid::new_v4().simple());
    let advisor = create_advisor(&server, &email).await;
    let advisor_id = Uuid::parse_str(advisor["id"].as_str().unwrap()).unwrap();

    let user_id = Uuid::new_v4();
    book_session(&server, user_id, advisor_id).await;

    let response = server.delete(&format!("/advisors/{}", advisor_id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    // the session survives, still pointing at the deleted advisor
    let rows = list_sessions(&server, user_id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["advisor_id"], advisor_id.to_string());

    let response = server.get("/advisors").await;
    let advisors: serde_json::Value = response.json();
    assert!(advisors.as_array().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_delete_unknown_advisor_not_found() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.delete(&format!("/advisors/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_seeding_fills_empty_roster_once() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    AdvisoryDeskService::seed_default_advisors(&state);
    // a second run sees a non-empty table and does nothing
    AdvisoryDeskService::seed_default_advisors(&state);

    let response = server.get("/advisors").await;
    response.assert_status(StatusCode::OK);
    let advisors: serde_json::Value = response.json();
    let advisors = advisors.as_array().unwrap();
    assert_eq!(advisors.len(), 5);

    let specialties: std::collections::HashSet<&str> = advisors
        .iter()
        .map(|a| a["specialty"].as_str().unwrap())
        .collect();
    assert_eq!(specialties.len(), 5);
}

#[tokio::test]
#[serial]
async fn test_health_reports_database_state() {
    let Some(state) = try_test_state() else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "200 OK");
}
