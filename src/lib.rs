//! Read-only events/albums GraphQL backend with bearer-token identity attachment.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
