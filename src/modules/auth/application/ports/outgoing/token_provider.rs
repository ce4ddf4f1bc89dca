use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed `iss` claim stamped on, and required of, every token.
pub const TOKEN_ISSUER: &str = "forum-hub";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Expired,
    BadSignature,
    WrongIssuer,
    Malformed,
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTokenReason::Expired => write!(f, "token has expired"),
            InvalidTokenReason::BadSignature => write!(f, "invalid token signature"),
            InvalidTokenReason::WrongIssuer => write!(f, "unexpected token issuer"),
            InvalidTokenReason::Malformed => write!(f, "malformed token"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(InvalidTokenReason),

    #[error("Token creation failed: {0}")]
    Creation(String),
}

/// JWT claims. `sub` carries the user's login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, subject: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        self.verify_token(token).map(|claims| claims.sub)
    }
}
