use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// The requested entity does not exist.
    NotFound(String),
    /// The caller does not own the resource it is operating on.
    Unauthorized(String),
    /// A balance check reported less than the requested amount.
    InsufficientFunds {
        balance_cents: i64,
        requested_cents: i64,
    },
    /// A cross-service call failed in transport (connect, timeout, decode)
    /// or returned an unclassifiable status.
    RemoteOperationFailed(String),
    /// A peer rejected the operation for a business reason; its status and
    /// message are relayed unchanged.
    RemoteRejected(StatusCode, String),
    /// Unique-constraint style duplication (registration, advisor email).
    Conflict(String),
    Validation(validator::ValidationErrors),
    Auth(AuthError),
    Token(String),
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Internal(String),
}

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
    BlacklistedToken,
    InvalidCredentials,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::InsufficientFunds {
                balance_cents,
                requested_cents,
            } => write!(
                f,
                "Insufficient funds: balance {} cents, requested {} cents",
                balance_cents, requested_cents
            ),
            ApiError::RemoteOperationFailed(msg) => write!(f, "Remote operation failed: {}", msg),
            ApiError::RemoteRejected(status, msg) => {
                write!(f, "Remote rejection ({}): {}", status, msg)
            }
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Token(e) => write!(f, "Token error: {}", e),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Authorization header required"),
            AuthError::InvalidFormat => write!(f, "Invalid Authorization format"),
            AuthError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            AuthError::BlacklistedToken => write!(f, "Token has been invalidated"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for AuthError {}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => ApiError::Conflict(info.message().to_string()),
            other => ApiError::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            ApiError::Unauthorized(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::InsufficientFunds {
                balance_cents,
                requested_cents,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!(
                    "Insufficient funds: balance {} cents, requested {} cents",
                    balance_cents, requested_cents
                ),
            ),
            ApiError::RemoteOperationFailed(msg) => {
                (StatusCode::BAD_GATEWAY, format!("Remote operation failed: {}", msg))
            }
            ApiError::RemoteRejected(status, msg) => (status, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Auth(e) => {
                let status = match e {
                    AuthError::InvalidFormat => StatusCode::BAD_REQUEST,
                    _ => StatusCode::UNAUTHORIZED,
                };
                (status, e.to_string())
            }
            ApiError::Token(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Token error: {}", e),
            ),
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            ),
            ApiError::DatabaseConnection(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection error: {}", e),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}
