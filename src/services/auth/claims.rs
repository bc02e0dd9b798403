use serde::{Deserialize, Serialize};

/// The identity carried inside a token's `data` claim.
///
/// Wire names follow the client: `email`, `username`, `_id`, `isAdmin`.
/// `id` is accepted as an alias for `_id` when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub email: String,
    pub username: String,
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub is_admin: bool,
}

/// Full token payload. `exp` is always `iat + max_age`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TokenClaims {
    pub data: Principal,
    pub iat: i64,
    pub exp: i64,
}
