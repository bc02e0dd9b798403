pub mod auth;
pub mod catalog;
