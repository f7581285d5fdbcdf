use serde_json::{json, Value};
use uuid::Uuid;

/// Registration payload with a random mailbox.
#[allow(dead_code)]
pub fn register_request() -> Value {
    json!({
        "email": format!("test{}@example.com", Uuid::new_v4().simple()),
        "password": "SecurePass123!",
        "username": format!("user{}", Uuid::new_v4().simple())
    })
}

#[allow(dead_code)]
pub fn register_request_with_email(email: &str) -> Value {
    json!({
        "email": email,
        "password": "SecurePass123!",
        "username": format!("user{}", Uuid::new_v4().simple())
    })
}

#[allow(dead_code)]
pub fn invest_request(account_id: Uuid, amount_cents: i64) -> Value {
    json!({
        "account_id": account_id,
        "investment_type": "STOCKS",
        "amount_cents": amount_cents
    })
}

/// Response body the invest service would return for a created record.
#[allow(dead_code)]
pub fn investment_record_body(user_id: Uuid, amount_cents: i64) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": user_id,
        "investment_type": "STOCKS",
        "amount_cents": amount_cents,
        "created_at": "2026-08-01T10:00:00Z"
    })
}

/// Response body the advisory service would return for a booked session.
#[allow(dead_code)]
pub fn session_record_body(user_id: Uuid, advisor_id: Uuid) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": user_id,
        "advisor_id": advisor_id,
        "session_date": "2026-09-01",
        "session_time": "10:30:00",
        "status": "PENDING",
        "created_at": "2026-08-01T10:00:00Z"
    })
}
