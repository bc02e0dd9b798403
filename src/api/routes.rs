/*
 * Responsibility
 * - URL 構造を定義 (/health, /graphql)
 * - identity 付与 (access middleware) は /graphql にだけ掛ける
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    graphql::{graphql, graphql_get},
    health::health,
};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let graphql_routes = Router::new().route("/graphql", get(graphql_get).post(graphql));
    let graphql_routes = access::apply(graphql_routes, state);

    Router::new()
        .route("/health", get(health))
        .merge(graphql_routes)
}
