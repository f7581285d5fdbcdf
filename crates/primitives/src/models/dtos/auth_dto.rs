use crate::utility::validate_password;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: String,

    pub password: String,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user_email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(length(min = 3))]
    pub username: Option<String>,
}

impl RegisterRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();

        // Fall back to the mailbox name when no username was provided
        if self
            .username
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true)
        {
            self.username = self.email.split('@').next().map(str::to_string);
        } else {
            self.username = self.username.map(|u| u.trim().to_lowercase());
        }
        self
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub token: String,
    pub user_email: String,
}

#[derive(Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
