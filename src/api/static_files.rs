//! Production-only serving of the built single-page client.
//!
//! Files under `STATIC_DIR` are served as-is; any other path that no route
//! matched gets `index.html` so client-side routing works.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;

pub fn apply(router: Router, config: &Config) -> Router {
    if !config.app_env.is_production() {
        return router;
    }

    tracing::info!(dir = %config.static_dir.display(), "serving static client");

    let index = config.static_dir.join("index.html");
    let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    router.fallback_service(assets)
}
