use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;

use crate::auth::application::ports::outgoing::token_provider::{
    InvalidTokenReason, TokenClaims, TokenError, TokenProvider, TOKEN_ISSUER,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    ttl_ms: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("ttl_ms", &self.ttl_ms)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            ttl_ms: config.ttl_ms,
            encoding_key,
            decoding_key,
            validation,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_token(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::milliseconds(self.ttl_ms);

        let claims = TokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Creation(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        InvalidTokenReason::Expired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token verification failed: invalid signature");
                        InvalidTokenReason::BadSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: unexpected issuer");
                        InvalidTokenReason::WrongIssuer
                    }
                    other => {
                        tracing::debug!("Token verification failed: {:?}", other);
                        InvalidTokenReason::Malformed
                    }
                };

                TokenError::Invalid(reason)
            })?;

        Ok(decoded.claims)
    }
}
