/*
 * Responsibility
 * - POST /graphql: JSON body の GraphQL request (query / variables / operationName) を実行
 * - GET /graphql: 同じ 3 項目を query string から読む (query のみ、mutation は 405)
 * - middleware が付与した AuthCtx を request data として resolver に渡す
 */
use async_graphql::parser::{
    parse_query,
    types::{DocumentOperations, OperationType},
};
use async_graphql::Variables;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::extractors::{AuthCtx, AuthCtxExtractor};
use crate::error::AppError;
use crate::state::AppState;

pub async fn graphql(
    State(state): State<AppState>,
    AuthCtxExtractor(auth_ctx): AuthCtxExtractor,
    Json(req): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(execute(&state, req, auth_ctx).await)
}

#[derive(Debug, Deserialize)]
pub struct GraphqlGetParams {
    query: String,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
    /// JSON-encoded object.
    variables: Option<String>,
}

impl GraphqlGetParams {
    fn into_request(self) -> Result<async_graphql::Request, AppError> {
        let mut req = async_graphql::Request::new(self.query);

        if let Some(name) = self.operation_name {
            req = req.operation_name(name);
        }
        if let Some(raw) = self.variables.filter(|v| !v.trim().is_empty()) {
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|err| AppError::BadRequest(format!("invalid variables: {err}")))?;
            req = req.variables(Variables::from_json(value));
        }

        Ok(req)
    }
}

pub async fn graphql_get(
    State(state): State<AppState>,
    AuthCtxExtractor(auth_ctx): AuthCtxExtractor,
    Query(params): Query<GraphqlGetParams>,
) -> Result<Json<async_graphql::Response>, AppError> {
    // GET must stay safe to repeat
    if !is_read_only(&params.query) {
        return Err(AppError::MethodNotAllowed("mutations must be sent with POST"));
    }

    let req = params.into_request()?;
    Ok(Json(execute(&state, req, auth_ctx).await))
}

async fn execute(
    state: &AppState,
    req: async_graphql::Request,
    auth_ctx: AuthCtx,
) -> async_graphql::Response {
    let res = state.schema.execute(req.data(auth_ctx)).await;

    if res.is_err() {
        tracing::debug!(errors = res.errors.len(), "graphql request finished with errors");
    }

    res
}

/// True unless the document declares a mutation or subscription.
///
/// Unparsable documents count as read-only; execution reports the syntax error.
fn is_read_only(query: &str) -> bool {
    let Ok(doc) = parse_query(query) else {
        return true;
    };

    match &doc.operations {
        DocumentOperations::Single(op) => matches!(op.node.ty, OperationType::Query),
        DocumentOperations::Multiple(ops) => ops
            .values()
            .all(|op| matches!(op.node.ty, OperationType::Query)),
    }
}
