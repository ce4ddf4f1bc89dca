pub mod password_hasher;
pub mod token_provider;
pub mod user_query;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{
    InvalidTokenReason, TokenClaims, TokenError, TokenProvider, TOKEN_ISSUER,
};
pub use user_query::{UserCredentials, UserQuery, UserQueryError};
