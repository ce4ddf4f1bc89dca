use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Stored password hash is not a valid PHC string")]
    InvalidHash,

    #[error("Background task failed")]
    TaskFailed,
}

/// Read-only: user rows arrive with their hash already computed.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// `Ok(false)` on mismatch; `Err` only when the hash itself is unusable.
    async fn verify_password(&self, secret: &str, hash: &str) -> Result<bool, HashError>;
}
