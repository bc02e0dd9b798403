pub mod album_repo;
pub mod error;
pub mod event_repo;
