/*
 * Responsibility
 * - The per-request identity seen by handlers and GraphQL resolvers
 * - Built by the access middleware from the Authorization header, then stored in request extensions
 *
 * Notes
 * - Token parsing/verification lives in middleware/services; this is only the contract type
 * - Either anonymous or carrying exactly one verified principal, never anything in between
 */
use crate::services::auth::Principal;

/// Identity attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCtx {
    user: Option<Principal>,
}

impl AuthCtx {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: Principal) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&Principal> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
