// src/application/mod.rs
pub mod dialog;
pub mod info_viewer;
pub mod lookup;

pub use dialog::{DialogState, ModelInfoDialog};
pub use info_viewer::{InfoViewer, MetadataRepository};
pub use lookup::{VersionIndex, VersionLookup};
