/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: AuthService (secret / max age / failure policy)
 *   - schema: GraphQL schema (CatalogStore を data として保持)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::graphql::CatalogSchema;
use crate::services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub schema: CatalogSchema,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, schema: CatalogSchema) -> Self {
        Self { auth, schema }
    }
}
