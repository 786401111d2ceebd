//! Metadata directory core.
//!
//! An in-memory registry of application metadata. Each application is
//! identified by its unique source path and owns one metadata record;
//! records are also grouped by owning company so every application under a
//! company can be listed in one query.
//!
//! Two indexes derive from the same record set:
//!
//! ```text
//! source  -> Record            (primary, authoritative)
//! company -> {source, ...}     (secondary, derived)
//! ```
//!
//! [`MetadataDirectory`] keeps the pair consistent under concurrent
//! upserts, including the case where a re-registered application moved to a
//! different company and must leave its old bucket. Both indexes sit behind
//! one lock; readers never observe a source absent from all buckets or
//! present in two.

pub mod directory;
pub mod error;
pub mod query;
pub mod record;
pub mod validate;

// Re-export main types
pub use directory::MetadataDirectory;
pub use error::DirectoryError;
pub use query::QueryFilter;
pub use record::{Maintainer, Record};
