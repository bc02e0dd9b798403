use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::AuthConfig;
use crate::services::auth::claims::{Principal, TokenClaims};
use crate::services::auth::policy::AuthFailurePolicy;

/// Errors returned by token signing and verification.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("token older than max age ({max_age_seconds}s)")]
    TooOld { max_age_seconds: u64 },
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// HS256 token signer/verifier bound to one shared secret.
///
/// - Key material is intentionally not printable via Debug.
/// - The same `max_age_seconds` drives `exp` at signing and the `iat` age check at verification.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    max_age_seconds: u64,
    leeway_seconds: u64,
    failure_policy: AuthFailurePolicy,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .field("max_age_seconds", &self.max_age_seconds)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = config.token_leeway_seconds;
        // nbf is optional, but honoured when present
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            max_age_seconds: config.token_max_age_seconds,
            leeway_seconds: config.token_leeway_seconds,
            failure_policy: config.failure_policy,
        }
    }

    pub fn failure_policy(&self) -> AuthFailurePolicy {
        self.failure_policy
    }

    pub fn max_age_seconds(&self) -> u64 {
        self.max_age_seconds
    }

    /// Sign `principal` into a token valid for `max_age_seconds` from now.
    ///
    /// Used at login/signup time and by the `mint-token` tool.
    pub fn sign_token(&self, principal: &Principal) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = TokenClaims {
            data: principal.clone(),
            iat,
            exp: iat.saturating_add(seconds(self.max_age_seconds)),
        };
        self.encode(&claims)
    }

    fn encode(&self, claims: &TokenClaims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }

    /// Verify a bearer token and return the principal it carries.
    ///
    /// Checks, in order: signature, `exp` (with leeway), payload shape, then
    /// that `iat` is no older than `max_age_seconds`.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let data =
            jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let now = Utc::now().timestamp();
        let oldest_allowed = claims
            .iat
            .saturating_add(seconds(self.max_age_seconds))
            .saturating_add(seconds(self.leeway_seconds));
        if now >= oldest_allowed {
            return Err(AuthError::TooOld {
                max_age_seconds: self.max_age_seconds,
            });
        }

        Ok(claims.data)
    }
}

fn seconds(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
