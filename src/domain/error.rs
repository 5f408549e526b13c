// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The external index has no record for the content hash (HTTP 404).
    #[error("Model not found")]
    ModelNotFound,
    /// The external index answered with any other error status.
    #[error("Error loading info ({status}) {reason}")]
    LookupFailed { status: u16, reason: String },
    /// The external index could not be reached at all.
    #[error("Lookup request failed: {reason}")]
    IndexUnreachable { reason: String },
    /// The local metadata fetch failed: unreachable service, error
    /// status, or a body that is not a JSON object.
    #[error("Metadata request failed for {model}: {reason}")]
    MetadataUnavailable { model: String, reason: String },
    /// The record carries no content hash to look up.
    #[error("No content hash in metadata")]
    MissingHash,
}
