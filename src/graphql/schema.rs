/*
 * Responsibility
 * - Query root (events / albums) と Schema の組み立て
 * - CatalogStore は schema data、AuthCtx は request data として resolver から見える
 * - read-only: mutation / subscription は無し
 */
use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Error, Object, Result, Schema};
use tracing::{debug, error};

use crate::api::extractors::AuthCtx;
use crate::graphql::types::{Album, Event};
use crate::services::catalog::CatalogStore;

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All events, soonest first.
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let store = catalog(ctx)?;
        debug!(
            backend = store.backend_name(),
            authenticated = is_authenticated(ctx),
            "listing events"
        );

        let rows = store.list_events().await.map_err(|e| {
            error!(error = %e, "failed to list events");
            Error::new("internal server error")
        })?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    /// All albums, newest release first.
    async fn albums(&self, ctx: &Context<'_>) -> Result<Vec<Album>> {
        let store = catalog(ctx)?;
        debug!(
            backend = store.backend_name(),
            authenticated = is_authenticated(ctx),
            "listing albums"
        );

        let rows = store.list_albums().await.map_err(|e| {
            error!(error = %e, "failed to list albums");
            Error::new("internal server error")
        })?;

        Ok(rows.into_iter().map(Album::from).collect())
    }
}

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn CatalogStore>> {
    ctx.data::<Arc<dyn CatalogStore>>()
}

// Requests executed outside the HTTP handler (tests, tooling) carry no AuthCtx.
fn is_authenticated(ctx: &Context<'_>) -> bool {
    ctx.data_opt::<AuthCtx>()
        .is_some_and(AuthCtx::is_authenticated)
}

pub fn build_schema(catalog: Arc<dyn CatalogStore>) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}
