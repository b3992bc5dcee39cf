//! Error types for the conversion pipeline

use thiserror::Error;

use crd2openapi_core::CrdError;

/// Schema builder failure.
///
/// External `SchemaBuilder` implementations report through `Other`; the
/// structured variants belong to the built-in structural builder.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("CRD doesn't have version {version}")]
    UnknownVersion { version: String },

    #[error("version {version} does not declare a structural schema")]
    MissingSchema { version: String },

    #[error("version {version} has an invalid structural schema: {source}")]
    InvalidSchema {
        version: String,
        #[source]
        source: serde_json::Error,
    },

    /// Opaque failure from an external builder; propagated verbatim.
    #[error("{0}")]
    Other(String),
}

/// Pipeline error. Every stage failure aborts the conversion; there is no
/// partial output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Crd(#[from] CrdError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to serialize schema document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
