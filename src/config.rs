use crate::auth::adapter::outgoing::jwt::JwtConfig;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_JWT_EXPIRATION_MS: i64 = 7_200_000;
pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_JWT_SECRET_LEN),
            });
        }

        let ttl_ms = match get("JWT_EXPIRATION_MS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::Invalid {
                    key: "JWT_EXPIRATION_MS",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_JWT_EXPIRATION_MS,
        };
        if ttl_ms <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_MS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            jwt: JwtConfig::new(secret, ttl_ms),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn minimal_env_uses_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", SECRET)]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://x");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.jwt.ttl_ms, DEFAULT_JWT_EXPIRATION_MS);
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("JWT_EXPIRATION_MS", "60000"),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.jwt.ttl_ms, 60_000);
        assert_eq!(config.jwt.secret, SECRET);
    }

    #[test]
    fn missing_database_url_is_reported() {
        let result = AppConfig::from_lookup(lookup(&[("JWT_SECRET", SECRET)]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn blank_secret_counts_as_missing() {
        let result =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "  ")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn short_secret_is_rejected() {
        let result =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "short")]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_SECRET", .. })
        ));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("PORT", "eighty"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }

    #[test]
    fn non_positive_expiration_is_rejected() {
        for raw in ["0", "-1"] {
            let result = AppConfig::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://x"),
                ("JWT_SECRET", SECRET),
                ("JWT_EXPIRATION_MS", raw),
            ]));

            assert!(matches!(
                result,
                Err(ConfigError::Invalid { key: "JWT_EXPIRATION_MS", .. })
            ));
        }
    }

    #[test]
    fn error_messages_name_the_key() {
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL is not set"
        );
    }
}
