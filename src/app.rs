/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (identity / CORS / security headers / HTTP)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::graphql::build_schema;
use crate::middleware::{cors, http, security_headers};
use crate::services::auth::build_auth_service;
use crate::services::catalog::{CatalogStore, PgCatalogStore};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,setlist_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing; stderr may be hidden depending on how we are launched.
        tracing::error!(?info, "panic");

        // Development: crash the whole process so the panic is noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    // Fatal before anything binds: no secret, no server.
    let config = Config::from_env().context("failed to load configuration")?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let catalog = PgCatalogStore::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("database connected");

    let state = build_state(&config, Arc::new(catalog));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("GraphQL endpoint at http://{}/graphql", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build process-level services and inject them into the shared application state.
pub fn build_state(config: &Config, catalog: Arc<dyn CatalogStore>) -> AppState {
    let auth = build_auth_service(&config.auth);
    let schema = build_schema(catalog);

    AppState::new(auth, schema)
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state);

    // Fallback first so the layers below also wrap static responses.
    let router = api::static_files::apply(router, config);
    let router = cors::apply(router, config);
    let router = security_headers::apply(router);

    http::apply(router)
}
