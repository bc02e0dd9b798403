pub mod schema;
pub mod types;

pub use schema::{CatalogSchema, build_schema};
