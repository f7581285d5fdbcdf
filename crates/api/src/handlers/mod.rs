pub mod advisory;
pub mod health;
pub mod invest;
pub mod ledger;

use serde::Deserialize;
use uuid::Uuid;

/// Caller identity for desk endpoints. The ledger passes it explicitly on
/// every request; the desks never see a token.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}
