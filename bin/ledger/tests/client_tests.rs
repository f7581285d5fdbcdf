use chrono::{NaiveDate, NaiveTime};
use moneta_core::clients::{AdvisoryClient, InvestmentClient, LedgerClient};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::advisory_dto::{CreateSessionRequest, RescheduleSessionRequest};
use moneta_primitives::models::dtos::investment_dto::CreateInvestmentRequest;
use moneta_primitives::models::entities::enum_types::InvestmentType;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn session_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 30, 0).unwrap()
}

#[tokio::test]
async fn test_investment_client_decodes_created_record() {
    let mock = MockServer::start().await;
    let client = InvestmentClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    let user_id = Uuid::new_v4();
    let record_id = Uuid::new_v4();

    let payload = CreateInvestmentRequest {
        user_id,
        account_id: Uuid::new_v4(),
        investment_type: InvestmentType::Bonds,
        amount_cents: 2500,
    };

    Mock::given(method("POST"))
        .and(path("/investments"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": record_id,
            "user_id": user_id,
            "investment_type": "BONDS",
            "amount_cents": 2500,
            "created_at": "2026-08-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let record = client.create(&payload).await.unwrap();

    assert_eq!(record.id, record_id);
    assert_eq!(record.user_id, user_id);
    assert_eq!(record.investment_type, InvestmentType::Bonds);
    assert_eq!(record.amount_cents, 2500);
}

#[tokio::test]
async fn test_client_relays_business_rejection() {
    let mock = MockServer::start().await;
    let client = InvestmentClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(422).set_body_string("not enough funds"))
        .mount(&mock)
        .await;

    let err = client
        .create(&CreateInvestmentRequest {
            user_id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            investment_type: InvestmentType::Stocks,
            amount_cents: 100,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::RemoteRejected(status, body) => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(body, "not enough funds");
        }
        other => panic!("expected RemoteRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_maps_server_error_to_remote_failure() {
    let mock = MockServer::start().await;
    let client = InvestmentClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock)
        .await;

    let err = client.list_for_user(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, ApiError::RemoteOperationFailed(_)));
}

#[tokio::test]
async fn test_client_maps_connection_failure_to_remote_failure() {
    // bind a port, then free it so the connect is refused; a pooled server
    // (MockServer::start) would keep listening after drop, so build a
    // dedicated one
    let mock = MockServer::builder().start().await;
    let uri = mock.uri();
    drop(mock);

    let client = InvestmentClient::new(reqwest::Client::new(), &uri).unwrap();

    let err = client.list_for_user(Uuid::new_v4()).await.unwrap_err();

    match err {
        ApiError::RemoteOperationFailed(msg) => assert!(msg.contains("unreachable")),
        other => panic!("expected RemoteOperationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_rejects_undecodable_success_body() {
    let mock = MockServer::start().await;
    let client = InvestmentClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/investments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock)
        .await;

    let err = client.list_for_user(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, ApiError::RemoteOperationFailed(_)));
}

#[tokio::test]
async fn test_ledger_client_posts_balance_probe() {
    let mock = MockServer::start().await;
    let client = LedgerClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    let account_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/check-balance"))
        .and(body_json(json!({
            "account_id": account_id,
            "amount_cents": 750
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance_cents": 900,
            "sufficient": true
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let check = client.check_balance(account_id, 750).await.unwrap();

    assert_eq!(check.balance_cents, 900);
    assert!(check.sufficient);
}

#[tokio::test]
async fn test_advisory_client_books_and_reschedules() {
    let mock = MockServer::start().await;
    let client = AdvisoryClient::new(reqwest::Client::new(), &mock.uri()).unwrap();

    let user_id = Uuid::new_v4();
    let advisor_id = Uuid::new_v4();
    let session_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": session_id,
            "user_id": user_id,
            "advisor_id": advisor_id,
            "session_date": "2026-09-01",
            "session_time": "10:30:00",
            "status": "PENDING",
            "created_at": "2026-08-01T10:00:00Z"
        })))
        .mount(&mock)
        .await;

    let session = client
        .book(&CreateSessionRequest {
            user_id,
            advisor_id,
            session_date: session_date(),
            session_time: session_time(),
        })
        .await
        .unwrap();

    assert_eq!(session.id, session_id);
    assert_eq!(session.advisor_id, advisor_id);

    Mock::given(method("PUT"))
        .and(path(format!("/sessions/{}", session_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": session_id,
            "user_id": user_id,
            "advisor_id": advisor_id,
            "session_date": "2026-09-15",
            "session_time": "14:00:00",
            "status": "RESCHEDULED",
            "created_at": "2026-08-01T10:00:00Z"
        })))
        .mount(&mock)
        .await;

    let session = client
        .reschedule(
            session_id,
            user_id,
            &RescheduleSessionRequest {
                session_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
                session_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            },
        )
        .await
        .unwrap();

    assert_eq!(session.session_date.to_string(), "2026-09-15");
}

#[tokio::test]
async fn test_client_rejects_invalid_base_url() {
    assert!(InvestmentClient::new(reqwest::Client::new(), "not a url").is_err());
    assert!(AdvisoryClient::new(reqwest::Client::new(), "").is_err());
    assert!(LedgerClient::new(reqwest::Client::new(), "http//missing-colon").is_err());
}
