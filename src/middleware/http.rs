//! Request plumbing shared by every route (GraphQL, health, static client).
//!
//! Each request gets an `x-request-id` (kept if the client sent one), a
//! tracing span carrying that id so the identity-step warnings and resolver
//! logs of one request can be correlated, a body cap and a deadline.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::http::{Request, header::HeaderName};
use axum::response::{IntoResponse, Response};
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// A GraphQL document plus variables; the catalog has no uploads.
const MAX_GRAPHQL_BODY_BYTES: usize = 64 * 1024;
const REQUEST_DEADLINE: Duration = Duration::from_secs(30);

pub fn apply(router: Router) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(middleware_error))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(RequestBodyLimitLayer::new(MAX_GRAPHQL_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_DEADLINE));

    router.layer(layers)
}

fn request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id,
    )
}

async fn middleware_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        tracing::warn!(deadline = ?REQUEST_DEADLINE, "request timed out");
        return AppError::Timeout.into_response();
    }

    tracing::error!(error = %err, "unhandled middleware error");
    AppError::Internal.into_response()
}
