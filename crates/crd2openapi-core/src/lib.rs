//! crd2openapi Core - CRD data model and version resolution
//!
//! This crate provides the foundational pieces shared by the converter:
//! - `CustomResourceDefinition`: the parsed CRD document
//! - `parse_crd`: dual-strategy (JSON, then YAML) document parsing
//! - `compare_versions` / `resolve_version`: Kubernetes-style version ordering
//! - `CrdError`: the core error type

pub mod crd;
pub mod error;
pub mod parse;
pub mod version;

pub use crd::{
    CrdNames, CrdScope, CrdSpec, CrdVersion, CustomResourceDefinition, GroupVersionKind, Metadata,
    VersionSchema,
};
pub use error::{CrdError, Result};
pub use parse::parse_crd;
pub use version::{compare_versions, resolve_version};
