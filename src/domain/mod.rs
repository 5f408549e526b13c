// src/domain/mod.rs
pub mod error;
pub mod fragment;
pub mod metadata;
pub mod model;

pub use error::DomainError;
pub use fragment::Fragment;
pub use metadata::MetadataRecord;
pub use model::{LookupStatus, ModelRef, RemoteVersion};
