/*
 * Responsibility
 * - Load settings from the environment (.env via dotenvy, then process env)
 * - Validate them up front: a missing JWT_SECRET or DATABASE_URL aborts startup
 * - Keep secrets out of Debug output
 */
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::services::auth::AuthFailurePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Token signing/verification settings.
///
/// `token_max_age_seconds` is used both as the `exp` offset when signing and
/// as the maximum `iat` age accepted when verifying.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_max_age_seconds: u64,
    pub token_leeway_seconds: u64,
    pub failure_policy: AuthFailurePolicy,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_max_age_seconds", &self.token_max_age_seconds)
            .field("token_leeway_seconds", &self.token_leeway_seconds)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

impl AuthConfig {
    pub const DEFAULT_MAX_AGE_SECONDS: u64 = 2 * 60 * 60;

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let token_max_age_seconds = match lookup("TOKEN_MAX_AGE_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("TOKEN_MAX_AGE_SECONDS"))?,
            None => Self::DEFAULT_MAX_AGE_SECONDS,
        };

        let token_leeway_seconds = match lookup("TOKEN_LEEWAY_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };

        let failure_policy = match lookup("AUTH_FAILURE_POLICY") {
            Some(v) => v
                .parse::<AuthFailurePolicy>()
                .map_err(|_| ConfigError::Invalid("AUTH_FAILURE_POLICY"))?,
            None => AuthFailurePolicy::default(),
        };

        Ok(Self {
            jwt_secret,
            token_max_age_seconds,
            token_leeway_seconds,
            failure_policy,
        })
    }
}

pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: PathBuf,

    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Secret first: without it nothing else matters.
        let auth = AuthConfig::from_lookup(&lookup)?;

        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3001,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("client/dist"));

        Ok(Self {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            static_dir,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_secret_is_fatal() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]))
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn blank_secret_counts_as_missing() {
        let err = AuthConfig::from_lookup(lookup(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret")]))
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/setlist"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3001);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.static_dir, PathBuf::from("client/dist"));
        assert_eq!(config.auth.token_max_age_seconds, 7200);
        assert_eq!(config.auth.token_leeway_seconds, 0);
        assert_eq!(
            config.auth.failure_policy,
            AuthFailurePolicy::FailOpenAnonymous
        );
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/setlist"),
            ("PORT", "8080"),
            ("APP_ENV", "Production"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("TOKEN_MAX_AGE_SECONDS", "600"),
            ("AUTH_FAILURE_POLICY", "fail_closed"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.auth.token_max_age_seconds, 600);
        assert_eq!(
            config.auth.failure_policy,
            AuthFailurePolicy::FailClosedReject
        );
    }

    #[test]
    fn rejects_bad_values() {
        let base = [("JWT_SECRET", "s3cret"), ("DATABASE_URL", "postgres://x")];

        let mut pairs = base.to_vec();
        pairs.push(("PORT", "not-a-port"));
        assert_eq!(
            Config::from_lookup(lookup(&pairs)).err(),
            Some(ConfigError::Invalid("PORT"))
        );

        let mut pairs = base.to_vec();
        pairs.push(("TOKEN_MAX_AGE_SECONDS", "0"));
        assert_eq!(
            Config::from_lookup(lookup(&pairs)).err(),
            Some(ConfigError::Invalid("TOKEN_MAX_AGE_SECONDS"))
        );

        let mut pairs = base.to_vec();
        pairs.push(("AUTH_FAILURE_POLICY", "sometimes"));
        assert_eq!(
            Config::from_lookup(lookup(&pairs)).err(),
            Some(ConfigError::Invalid("AUTH_FAILURE_POLICY"))
        );
    }

    #[test]
    fn leeway_must_be_a_whole_number_of_seconds() {
        for bad in ["soon", "-5", "1.5", ""] {
            let err = AuthConfig::from_lookup(lookup(&[
                ("JWT_SECRET", "s3cret"),
                ("TOKEN_LEEWAY_SECONDS", bad),
            ]))
            .unwrap_err();
            assert_eq!(err, ConfigError::Invalid("TOKEN_LEEWAY_SECONDS"), "{bad:?}");
        }

        let auth = AuthConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_LEEWAY_SECONDS", " 30 "),
        ]))
        .unwrap();
        assert_eq!(auth.token_leeway_seconds, 30);
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let auth = AuthConfig::from_lookup(lookup(&[("JWT_SECRET", "hunter2")])).unwrap();
        let printed = format!("{:?}", auth);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
