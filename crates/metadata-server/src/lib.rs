//! Metadata directory REST server.
//!
//! Thin axum adapter over [`metadata_core::MetadataDirectory`]: decodes
//! YAML/JSON payloads into records, feeds them to the directory, and
//! serializes query results back out. All directory semantics live in
//! metadata-core; this crate is transport glue.

pub mod decode;
pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
