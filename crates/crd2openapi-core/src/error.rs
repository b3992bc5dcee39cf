//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrdError {
    /// Neither the JSON nor the YAML parser accepted the input. Valid JSON
    /// is also valid YAML, so the YAML attempt runs last and its error is
    /// the one reported.
    #[error("failed to parse CRD document: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("expected a CustomResourceDefinition, got {kind}")]
    WrongKind { kind: String },

    #[error("CRD does not declare any versions")]
    NoVersions,

    #[error("CRD doesn't have version {requested}, but has [{}]", .declared.join(", "))]
    UnknownVersion {
        requested: String,
        declared: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, CrdError>;
