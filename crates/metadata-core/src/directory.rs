//! The dual-index metadata directory.
//!
//! The `MetadataDirectory` owns the primary (source -> record) and secondary
//! (company -> set of sources) indexes and keeps them mutually consistent
//! under concurrent upserts and queries.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;

use crate::error::DirectoryError;
use crate::query::QueryFilter;
use crate::record::Record;
use crate::validate;

/// Both indexes behind one lock. Every multi-step mutation runs inside a
/// single write-guard scope, so a reader can never observe a source absent
/// from all company buckets or present in two.
#[derive(Default)]
struct Indexes {
    /// source -> record. Authoritative store of record content.
    by_source: HashMap<String, Record>,
    /// company -> set of sources. Derived from `by_source`.
    by_company: HashMap<String, HashSet<String>>,
}

/// In-memory metadata directory.
///
/// Cheap to share: wrap in an `Arc` and hand a clone of the handle to each
/// request task.
pub struct MetadataDirectory {
    indexes: RwLock<Indexes>,
}

impl MetadataDirectory {
    pub fn new() -> Self {
        Self {
            indexes: RwLock::new(Indexes::default()),
        }
    }

    /// Create or replace the record for `record.source`.
    ///
    /// Preconditions (non-empty source and company, mailbox syntax for every
    /// maintainer email) are checked before the lock is taken; a rejected
    /// record leaves both indexes untouched. When an existing record moved
    /// to a different company, its source leaves the old company bucket
    /// before joining the new one, and a bucket emptied by the move is
    /// pruned.
    pub async fn upsert(&self, record: Record) -> Result<Record, DirectoryError> {
        validate::validate_record(&record)?;

        let mut indexes = self.indexes.write().await;

        let previous_company = indexes
            .by_source
            .get(&record.source)
            .map(|existing| existing.company.clone());

        if let Some(old_company) = previous_company {
            if old_company != record.company {
                tracing::debug!(
                    source = %record.source,
                    from = %old_company,
                    to = %record.company,
                    "migrating source between company buckets"
                );
                let bucket_emptied = match indexes.by_company.get_mut(&old_company) {
                    Some(members) => {
                        members.remove(&record.source);
                        members.is_empty()
                    }
                    None => false,
                };
                if bucket_emptied {
                    indexes.by_company.remove(&old_company);
                }
            }
        }

        indexes
            .by_company
            .entry(record.company.clone())
            .or_default()
            .insert(record.source.clone());
        indexes
            .by_source
            .insert(record.source.clone(), record.clone());

        tracing::debug!(source = %record.source, company = %record.company, "record stored");
        Ok(record)
    }

    /// Run a read-only query.
    ///
    /// Unknown sources and companies yield an empty result rather than an
    /// error. Result order for company queries is unspecified.
    pub async fn query(&self, filter: &QueryFilter) -> Vec<Record> {
        let indexes = self.indexes.read().await;

        match filter {
            QueryFilter::BySource(source) => {
                indexes.by_source.get(source).cloned().into_iter().collect()
            }
            QueryFilter::ByCompany { company, title } => {
                let Some(members) = indexes.by_company.get(company) else {
                    return Vec::new();
                };
                members
                    .iter()
                    .filter_map(|source| indexes.by_source.get(source))
                    .filter(|record| match title {
                        Some(title) => record.title.as_deref() == Some(title.as_str()),
                        None => true,
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    /// Number of records in the primary index.
    pub async fn len(&self) -> usize {
        self.indexes.read().await.by_source.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Sorted company keys currently holding at least one source. Buckets
    /// emptied by a company change are pruned, so every listed company is
    /// live.
    pub async fn companies(&self) -> Vec<String> {
        let indexes = self.indexes.read().await;
        let mut companies: Vec<String> = indexes.by_company.keys().cloned().collect();
        companies.sort();
        companies
    }
}

impl Default for MetadataDirectory {
    fn default() -> Self {
        Self::new()
    }
}
