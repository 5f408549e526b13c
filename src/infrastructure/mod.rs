// src/infrastructure/mod.rs
pub mod civitai;
pub mod comfy;
pub mod renderer;

pub use civitai::CivitaiIndex;
pub use comfy::ComfyRepository;
pub use renderer::ContentRenderer;
