// src/domain/model.rs
use std::fmt;

use crate::constants::CIVITAI_MODELS_PAGE;

/// Identifying pair for a model asset: the ComfyUI folder type
/// ("loras", "checkpoints", ...) and the file name within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub kind: String,
    pub name: String,
}

impl ModelRef {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// The `type/name` composite the metadata endpoint is keyed by.
    pub fn composite(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Descriptive info for a model version as returned by the Civitai
/// by-hash lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVersion {
    /// Identifier of the parent model, normalized to text (the API has
    /// served both numbers and strings here).
    pub model_id: String,
    /// Display name of the parent model.
    pub model_name: String,
    /// Preview image URLs; only the first is shown.
    pub images: Vec<String>,
}

impl RemoteVersion {
    /// URL of the model's detail page.
    pub fn page_url(&self) -> String {
        format!("{}/{}", CIVITAI_MODELS_PAGE, self.model_id)
    }

    pub fn preview_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Outcome of the one-shot external lookup. `Pending` and the two
/// terminal states are mutually exclusive; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Pending,
    Found(RemoteVersion),
    /// User-visible failure text, without the warning prefix.
    Failed(String),
}
