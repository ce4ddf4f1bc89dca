use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier},
    Argon2,
};
use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

/// Argon2 verifier. Verification runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn verify_password(&self, secret: &str, hash: &str) -> Result<bool, HashError> {
        let secret = secret.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::InvalidHash)?;

            // Parameters are read back from the PHC string
            match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::InvalidHash),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

/// Argon2id PHC string for `secret`, in the shape provisioned user rows carry.
#[cfg(test)]
pub fn hash_for_tests(secret: &str) -> String {
    use argon2::{
        password_hash::{PasswordHasher as _, SaltString},
        Algorithm, Params, Version,
    };
    use rand_core::OsRng;

    // 4MB memory, 3 iterations, 1 thread
    let params = Params::new(4 * 1024, 3, 1, None).unwrap();
    let salt = SaltString::generate(&mut OsRng);

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(secret.as_bytes(), &salt)
        .unwrap()
        .to_string()
}
