mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::fixtures::{invest_request, investment_record_body};
use common::{create_test_account, create_test_app, create_test_user, try_test_state, user_id_from_token};
use diesel::prelude::*;
use moneta_core::app_state::DbPool;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const ADVISORY_URL: &str = "http://localhost:8082";

#[tokio::test]
#[serial]
async fn test_invest_debits_account_and_records_withdrawal() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let email = format!("inv{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 1000).await;
    let user_id = user_id_from_token(&state, &token);

    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(investment_record_body(user_id, 400)))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["investment_type"], "STOCKS");
    assert_eq!(body["amount_cents"], 400);

    // the funding account was debited and the movement logged as a withdrawal
    let response = server.get("/accounts").authorization_bearer(&token).await;
    let accounts: serde_json::Value = response.json();
    assert_eq!(accounts[0]["balance_cents"], 600);

    let response = server
        .get(&format!("/transactions/{}", account_id))
        .authorization_bearer(&token)
        .await;
    let rows: serde_json::Value = response.json();
    let rows = rows["transactions"].as_array().unwrap().clone();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kind"], "WITHDRAWAL");
    assert_eq!(rows[0]["amount_cents"], 400);
}

#[tokio::test]
#[serial]
async fn test_invest_insufficient_funds_never_reaches_remote() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("poor{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 300).await;

    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_invest)
        .await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Insufficient funds"));

    let response = server.get("/accounts").authorization_bearer(&token).await;
    let accounts: serde_json::Value = response.json();
    assert_eq!(accounts[0]["balance_cents"], 300);
}

#[tokio::test]
#[serial]
async fn test_invest_remote_server_error_leaves_account_untouched() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("r500{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 1000).await;

    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let response = server.get("/accounts").authorization_bearer(&token).await;
    let accounts: serde_json::Value = response.json();
    assert_eq!(accounts[0]["balance_cents"], 1000);

    let response = server
        .get(&format!("/transactions/{}", account_id))
        .authorization_bearer(&token)
        .await;
    let rows: serde_json::Value = response.json();
    assert!(rows["transactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_invest_remote_rejection_passes_through_unchanged() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("r422{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 1000).await;

    let remote_body = "Insufficient funds: balance 100 cents, requested 400 cents";
    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(422).set_body_string(remote_body))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    // the desk's status and message are relayed as-is
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.text(), remote_body);
}

#[tokio::test]
#[serial]
async fn test_invest_remote_unreachable_maps_to_bad_gateway() {
    let Some(state) = try_test_state("http://127.0.0.1:1", ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state)).unwrap();

    let email = format!("down{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 1000).await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().contains("unreachable"));
}

/// Responder that deletes the funding account while serving the remote
/// create, so the debit that follows finds nothing to debit.
struct DeleteAccountOnCreate {
    pool: DbPool,
    account_id: Uuid,
    body: serde_json::Value,
}

impl Respond for DeleteAccountOnCreate {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        use moneta_primitives::schema::accounts;

        let mut conn = self.pool.get().expect("db connection");
        diesel::delete(accounts::table.filter(accounts::id.eq(self.account_id)))
            .execute(&mut conn)
            .expect("Failed to delete account");

        ResponseTemplate::new(201).set_body_json(self.body.clone())
    }
}

#[tokio::test]
#[serial]
async fn test_failed_debit_after_remote_create_is_not_compensated() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let email = format!("gap{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let account_id = create_test_account(&server, &token, 1000).await;
    let user_id = user_id_from_token(&state, &token);

    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(DeleteAccountOnCreate {
            pool: state.db.clone(),
            account_id,
            body: investment_record_body(user_id, 400),
        })
        .expect(1)
        .mount(&mock_invest)
        .await;

    // no compensating delete is ever issued for the remote record
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/investments/.+$"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_invest)
        .await;

    let response = server
        .post("/to-invest")
        .authorization_bearer(&token)
        .json(&invest_request(account_id, 400))
        .await;

    // the caller sees the debit failure even though the remote record stands
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_view_investments_relays_remote_list() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let email = format!("view{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let user_id = user_id_from_token(&state, &token);

    Mock::given(method("GET"))
        .and(path("/investments"))
        .and(query_param("user_id", user_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            investment_record_body(user_id, 100),
            investment_record_body(user_id, 200),
        ])))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .get("/view-investments")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_update_investment_relays_to_remote() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let email = format!("updinv{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let user_id = user_id_from_token(&state, &token);
    let investment_id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/investments/{}", investment_id)))
        .and(query_param("user_id", user_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(investment_record_body(user_id, 750)))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .put(&format!("/update-investment/{}", investment_id))
        .authorization_bearer(&token)
        .json(&json!({ "amount_cents": 750 }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["amount_cents"], 750);
}

#[tokio::test]
#[serial]
async fn test_delete_investment_relays_to_remote() {
    let mock_invest = MockServer::start().await;
    let Some(state) = try_test_state(&mock_invest.uri(), ADVISORY_URL) else {
        return;
    };
    let server = TestServer::new(create_test_app(state.clone())).unwrap();

    let email = format!("delinv{}@example.com", Uuid::new_v4().simple());
    let (token, _) = create_test_user(&server, &email).await;
    let user_id = user_id_from_token(&state, &token);
    let investment_id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/investments/{}", investment_id)))
        .and(query_param("user_id", user_id.to_string()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_invest)
        .await;

    let response = server
        .delete(&format!("/delete-investment/{}", investment_id))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}
