//! Error types for qualified Dublin Core generation.
//!
//! This module provides the [`QdcError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Field content is never an error: empty values are skipped and unknown
//! vocabulary passes through. Errors come from collaborators (the host's
//! storage, geolocation or configuration) and from writing XML.

use thiserror::Error;

/// Error type for all library operations.
#[derive(Error, Debug)]
pub enum QdcError {
    /// A host collaborator (file storage, geolocation, field catalog) failed.
    #[error("Collaborator failure: {0}")]
    Collaborator(String),

    /// A configuration document could not be interpreted.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The XML writer rejected an event or produced invalid UTF-8.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// JSON error while reading configuration or item data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<quick_xml::Error> for QdcError {
    fn from(err: quick_xml::Error) -> Self {
        QdcError::XmlWrite(err.to_string())
    }
}

/// Convenience type alias for [`std::result::Result`] with [`QdcError`].
pub type Result<T> = std::result::Result<T, QdcError>;
