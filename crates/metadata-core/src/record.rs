//! Record types stored in the directory.

use serde::{Deserialize, Serialize};

/// One maintainer contact for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

/// One application's metadata entry, keyed by its source path.
///
/// Immutable once validated; a re-upsert with the same source replaces the
/// record wholesale. There is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique source identifier (e.g. a repository URL). Primary key.
    pub source: String,
    /// Owning company. Secondary grouping key.
    pub company: String,
    /// Human-readable title, used only to narrow in-company queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered maintainer contacts.
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
}
