// src/infrastructure/comfy.rs
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::application::MetadataRepository;
use crate::constants::{HTTP_TIMEOUT_SECS, METADATA_ROUTE};
use crate::domain::{DomainError, MetadataRecord, ModelRef};

/// The set `encodeURIComponent` leaves alone. The browser extension
/// encodes the whole `type/name` composite as one component, slash
/// included, and the server decodes it the same way.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Metadata repository backed by the pysssss custom-scripts endpoint
/// of a running ComfyUI instance.
#[derive(Debug, Clone)]
pub struct ComfyRepository {
    client: Client,
    base_url: String,
}

impl ComfyRepository {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::MetadataUnavailable {
                model: String::new(),
                reason: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn metadata_url(&self, model: &ModelRef) -> String {
        let composite = model.composite();
        let component = utf8_percent_encode(&composite, COMPONENT_ENCODE_SET);
        format!("{}{}{}", self.base_url, METADATA_ROUTE, component)
    }

    fn unavailable(model: &ModelRef, reason: impl Into<String>) -> DomainError {
        DomainError::MetadataUnavailable {
            model: model.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MetadataRepository for ComfyRepository {
    #[instrument(level = "debug", skip(self), fields(model = %model))]
    async fn get_metadata(&self, model: &ModelRef) -> Result<MetadataRecord, DomainError> {
        let url = self.metadata_url(model);
        debug!(%url, "fetching metadata record");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unavailable(model, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unavailable(
                model,
                format!("service answered {}", status.as_u16()),
            ));
        }

        response
            .json::<MetadataRecord>()
            .await
            .map_err(|e| Self::unavailable(model, format!("invalid response body: {e}")))
    }
}
