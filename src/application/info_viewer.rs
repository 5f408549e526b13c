// src/application/info_viewer.rs
use async_trait::async_trait;

use crate::domain::{DomainError, MetadataRecord, ModelRef};

#[async_trait]
pub trait MetadataRepository {
    /// Fetch the metadata record for a model asset.
    async fn get_metadata(&self, model: &ModelRef) -> Result<MetadataRecord, DomainError>;
}

pub struct InfoViewer<R: MetadataRepository> {
    repository: R,
}

impl<R: MetadataRepository> InfoViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn view_metadata(&self, model: &ModelRef) -> Result<MetadataRecord, DomainError> {
        self.repository.get_metadata(model).await
    }
}
