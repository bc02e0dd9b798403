/*
 * Responsibility
 * - HTTP 入口の公開ポイント (routes() の re-export など)
 */
pub mod extractors;
pub mod handlers;
mod routes;
pub mod static_files;

pub use routes::routes;
