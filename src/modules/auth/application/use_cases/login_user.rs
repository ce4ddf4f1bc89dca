use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Login Request =========================

/// Validated credentials. Both fields are guaranteed non-blank.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    login: String,
    secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Login cannot be empty")]
    EmptyLogin,

    #[error("Secret cannot be empty")]
    EmptySecret,
}

impl LoginRequest {
    pub fn new(login: String, secret: String) -> Result<Self, LoginRequestError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(LoginRequestError::EmptyLogin);
        }

        // The secret is compared as typed; only an all-blank value is rejected
        if secret.trim().is_empty() {
            return Err(LoginRequestError::EmptySecret);
        }

        Ok(Self {
            login: login.to_string(),
            secret,
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid login or secret")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginUserResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
}

impl LoginUserResponse {
    pub fn bearer(token: String) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
        }
    }
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // 1️⃣ Find user by login
        let user = self
            .query
            .find_by_login(request.login())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Verify secret
        let is_valid = self
            .password_hasher
            .verify_password(request.secret(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Issue token
        let token = self
            .token_provider
            .generate_token(&user.login)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!("Issued token for user {}", user.id);

        Ok(LoginUserResponse::bearer(token))
    }
}
