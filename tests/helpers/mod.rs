use mockito::ServerGuard;
use modelview::domain::ModelRef;
use modelview::infrastructure::{CivitaiIndex, ComfyRepository};
use serde_json::{json, Value};

/// Known fixture values shared by the HTTP tests.
#[allow(dead_code)]
pub mod fixtures {
    /// Path the metadata mock must answer on: the `type/name` composite
    /// percent-encoded as a single component, slash included.
    pub const METADATA_PATH: &str = "/pysssss/metadata/loras%2Fdetail.safetensors";

    pub const HASH: &str = "abc123";
    pub const NOTES: &str = "See https://example.com/a for details";
}

#[allow(dead_code)]
pub fn test_model() -> ModelRef {
    ModelRef::new("loras", "detail.safetensors")
}

/// A metadata record with notes, hash, and one plain display field.
#[allow(dead_code)]
pub fn sample_record() -> Value {
    json!({
        "pysssss.notes": fixtures::NOTES,
        "pysssss.sha256": fixtures::HASH,
        "format": "safetensors"
    })
}

/// The by-hash response body for a version with one preview image.
#[allow(dead_code)]
pub fn sample_version() -> Value {
    json!({
        "modelId": 58390,
        "name": "v1.0",
        "model": {"name": "Detail Tweaker"},
        "images": [
            {"url": "https://image.civitai.com/0.jpeg"},
            {"url": "https://image.civitai.com/1.jpeg"}
        ]
    })
}

/// Repository pointed at a mockito server standing in for ComfyUI.
#[allow(dead_code)]
pub fn comfy_repository(server: &ServerGuard) -> ComfyRepository {
    ComfyRepository::new(server.url()).expect("repository should build")
}

/// Index pointed at a mockito server standing in for the Civitai API.
#[allow(dead_code)]
pub fn civitai_index(server: &ServerGuard) -> CivitaiIndex {
    CivitaiIndex::with_base_url(server.url()).expect("index should build")
}
