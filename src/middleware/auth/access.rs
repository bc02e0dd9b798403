//! Bearer token → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` があれば検証し、成功時は principal 付きの AuthCtx
//! - ヘッダ無し / Bearer 以外 / 空トークンは匿名 (エラーではない)
//! - 検証失敗は warn ログを出し、`AuthFailurePolicy` に従って匿名 or 401
//!
//! The resolution itself is a pure function of the headers (`resolve`), so it
//! can be tested and reused outside axum.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AuthError, AuthFailurePolicy, AuthService};
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// GraphQL ルートに identity 付与を掛ける。
///
/// 例：
/// ```ignore
/// let graphql = Router::new().route("/graphql", post(handlers::graphql::graphql));
/// let graphql = middleware::auth::access::apply(graphql, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

/// Candidate token from the `Authorization` header.
///
/// `None` when the header is absent, not valid UTF-8, not in the `Bearer `
/// scheme, or empty after trimming.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    (!token.is_empty()).then_some(token)
}

/// Resolve the request identity from its headers.
///
/// `Ok(anonymous)` when no token is presented; `Err` only when a token was
/// presented and failed verification.
pub fn resolve(auth: &AuthService, headers: &HeaderMap) -> Result<AuthCtx, AuthError> {
    match bearer_token(headers) {
        None => Ok(AuthCtx::anonymous()),
        Some(token) => auth.verify(token).map(AuthCtx::authenticated),
    }
}

/// `resolve` + the configured failure policy. Never fails under `FailOpenAnonymous`.
pub fn attach(auth: &AuthService, headers: &HeaderMap) -> Result<AuthCtx, AppError> {
    match resolve(auth, headers) {
        Ok(ctx) => Ok(ctx),
        Err(err) => {
            let policy = auth.failure_policy();
            tracing::warn!(error = %err, ?policy, "bearer token verification failed");

            match policy {
                AuthFailurePolicy::FailOpenAnonymous => Ok(AuthCtx::anonymous()),
                AuthFailurePolicy::FailClosedReject => Err(AppError::Unauthorized),
            }
        }
    }
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_ctx = attach(&state.auth, req.headers())?;

    tracing::debug!(
        authenticated = auth_ctx.is_authenticated(),
        "request identity resolved"
    );

    // middleware → extractor への受け渡し (insert は置き換えなので二重適用でも結果は同じ)
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
