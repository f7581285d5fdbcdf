use argon2::{Argon2, Params};
use password_hash::PasswordHasher;

use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::security::SecurityConfig;
use crate::services::notification_service::NotificationService;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::EventChannel;
use moneta_primitives::models::dtos::auth_dto::{RegisterRequest, RegisterResponse};
use moneta_primitives::models::entities::user::{NewUser, ROLE_USER};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info};

pub struct RegisterService;

impl RegisterService {
    pub async fn register(
        state: &AppState,
        payload: RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("auth.register: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let password = SecretString::new(payload.password.into());

        let password_hash = Self::hash_password(&password)?;

        let new_user = NewUser {
            email: &payload.email,
            username: payload.username.as_deref().unwrap_or(&payload.email),
            password_hash: &password_hash,
            roles: vec![ROLE_USER.to_string()],
        };

        let user = UserRepository::create(&mut conn, new_user)?;

        drop(conn);

        let token = SecurityConfig::create_token(state, user.id).map_err(|_| {
            error!("auth.register: jwt generation failed");
            ApiError::Internal("Authentication service error".into())
        })?;

        info!(
            user_id = %user.id,
            email = %user.email,
            "User registered successfully"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Account,
            user.id,
            "Welcome to Moneta. Your profile is ready.".to_string(),
        );

        Ok(RegisterResponse {
            token,
            user_email: user.email,
        })
    }

    fn hash_password(password: &SecretString) -> Result<String, ApiError> {
        let argon2 = Self::create_argon2()?;
        let salt = argon2::password_hash::SaltString::generate(&mut rand_core::OsRng);

        argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| {
                error!("auth.register: password hashing failed");
                ApiError::Internal("Credential processing failed".into())
            })
    }

    pub fn create_argon2() -> Result<Argon2<'static>, ApiError> {
        let params = Params::new(
            65536, // 64 MiB memory
            3,     // iterations
            1,     // parallelism
            None,
        )
        .map_err(|e| {
            error!("Argon2 params error: {}", e);
            ApiError::Internal("Encryption configuration error".to_string())
        })?;
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Ok(argon2)
    }
}
