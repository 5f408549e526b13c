// src/application/lookup.rs
use async_trait::async_trait;

use crate::domain::{DomainError, MetadataRecord, RemoteVersion};

#[async_trait]
pub trait VersionIndex {
    /// Look up descriptive info for a model version by content hash.
    async fn find_by_hash(&self, hash: &str) -> Result<RemoteVersion, DomainError>;
}

pub struct VersionLookup<I: VersionIndex> {
    index: I,
}

impl<I: VersionIndex> VersionLookup<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub async fn by_hash(&self, hash: &str) -> Result<RemoteVersion, DomainError> {
        self.index.find_by_hash(hash).await
    }

    /// Look up the version for an already-fetched metadata record. A
    /// record without a content hash fails before any request is made.
    pub async fn for_record(
        &self,
        record: &MetadataRecord,
    ) -> Result<RemoteVersion, DomainError> {
        let hash = record.content_hash().ok_or(DomainError::MissingHash)?;
        self.index.find_by_hash(hash).await
    }
}
