//! GraphQL surface over the in-memory portal dataset.

pub mod nodes;
pub mod schema;

pub use schema::{MutationRoot, PortalData, QueryRoot, SchemaType, build_schema};
