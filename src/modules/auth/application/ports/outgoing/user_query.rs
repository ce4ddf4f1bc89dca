use async_trait::async_trait;

/// What login needs to know about a user. Users are provisioned outside
/// this service, so there is no write side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: i64,
    pub login: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_login(&self, login: &str)
        -> Result<Option<UserCredentials>, UserQueryError>;
}
