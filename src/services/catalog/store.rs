//! Read-only catalog interface used by the GraphQL resolvers.
use async_trait::async_trait;

use crate::repos::{album_repo::AlbumRow, error::RepoError, event_repo::EventRow};

/// Source of events and albums.
///
/// Kept behind a trait so resolvers can be exercised without a database.
/// Implementations are shared as `Arc<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn list_events(&self) -> Result<Vec<EventRow>, RepoError>;

    async fn list_albums(&self) -> Result<Vec<AlbumRow>, RepoError>;
}
