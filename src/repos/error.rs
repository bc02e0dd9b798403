/*
 * Responsibility
 * - Errors the catalog repos surface upward (the catalog service maps them to GraphQL errors)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),
}
