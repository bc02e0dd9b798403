/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: identity 付与 (GraphQL ルートのみ)
 * - cors / http / security_headers: 全ルート共通
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
