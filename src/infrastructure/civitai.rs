// src/infrastructure/civitai.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::VersionIndex;
use crate::constants::{CIVITAI_API_BASE, HTTP_TIMEOUT_SECS};
use crate::domain::{DomainError, RemoteVersion};

/// Version index backed by the public Civitai API. The base URL is
/// overridable for tests; production callers use [`CivitaiIndex::new`].
#[derive(Debug, Clone)]
pub struct CivitaiIndex {
    client: Client,
    base_url: String,
}

/// Wire shape of the by-hash response; only the fields the dialog
/// renders are deserialized.
#[derive(Debug, Deserialize)]
struct VersionBody {
    #[serde(rename = "modelId")]
    model_id: IdValue,
    model: ModelBody,
    #[serde(default)]
    images: Vec<ImageBody>,
}

/// The API has served the model id both as a number and as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ModelBody {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ImageBody {
    url: String,
}

impl CivitaiIndex {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_url(CIVITAI_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::IndexUnreachable {
                reason: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl From<VersionBody> for RemoteVersion {
    fn from(body: VersionBody) -> Self {
        let model_id = match body.model_id {
            IdValue::Number(n) => n.to_string(),
            IdValue::Text(s) => s,
        };
        RemoteVersion {
            model_id,
            model_name: body.model.name,
            images: body.images.into_iter().map(|i| i.url).collect(),
        }
    }
}

#[async_trait]
impl VersionIndex for CivitaiIndex {
    #[instrument(level = "debug", skip(self))]
    async fn find_by_hash(&self, hash: &str) -> Result<RemoteVersion, DomainError> {
        let url = format!("{}/model-versions/by-hash/{hash}", self.base_url);
        debug!(%url, "querying version index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::IndexUnreachable {
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::OK => response.json::<VersionBody>().await.map(Into::into).map_err(
                |_| DomainError::LookupFailed {
                    status: 200,
                    reason: "invalid response body".to_string(),
                },
            ),
            StatusCode::NOT_FOUND => Err(DomainError::ModelNotFound),
            status => Err(DomainError::LookupFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_numeric_model_id_when_converting_then_normalizes_to_text() {
        let body: VersionBody = serde_json::from_value(json!({
            "modelId": 58390,
            "model": {"name": "Detail Tweaker"},
            "images": [{"url": "https://img/0.png"}]
        }))
        .unwrap();

        let version = RemoteVersion::from(body);

        assert_eq!(version.model_id, "58390");
        assert_eq!(version.model_name, "Detail Tweaker");
        assert_eq!(version.images, vec!["https://img/0.png".to_string()]);
    }

    #[test]
    fn given_string_model_id_when_converting_then_keeps_text() {
        let body: VersionBody = serde_json::from_value(json!({
            "modelId": "58390",
            "model": {"name": "Detail Tweaker"}
        }))
        .unwrap();

        let version = RemoteVersion::from(body);

        assert_eq!(version.model_id, "58390");
        assert!(version.images.is_empty());
    }

    #[test]
    fn given_extra_fields_when_deserializing_then_ignores_them() {
        // The real API sends far more than the dialog renders.
        let body: VersionBody = serde_json::from_value(json!({
            "modelId": 1,
            "name": "v1.0",
            "baseModel": "SD 1.5",
            "model": {"name": "m", "type": "LORA", "nsfw": false},
            "downloadUrl": "https://x",
            "images": []
        }))
        .unwrap();

        assert_eq!(RemoteVersion::from(body).model_name, "m");
    }
}
