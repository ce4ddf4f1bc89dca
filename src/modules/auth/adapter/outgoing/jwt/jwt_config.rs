/// Signing settings, built once from [`crate::config::AppConfig`] and never
/// mutated afterwards.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in milliseconds.
    pub ttl_ms: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_ms,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_ms", &self.ttl_ms)
            .finish()
    }
}
