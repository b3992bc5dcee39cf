//! CRD document parsing
//!
//! Two parse strategies run in order: strict JSON first, then YAML. The
//! first success wins; when both fail, the YAML error is surfaced since
//! YAML is the superset format.

use crate::crd::CustomResourceDefinition;
use crate::error::{CrdError, Result};

/// Parse a CRD document from raw bytes.
///
/// Accepts either JSON or YAML. A document carrying a `kind` other than
/// `CustomResourceDefinition` is rejected; documents without a `kind` (bare
/// spec fragments) are accepted as-is.
pub fn parse_crd(src: &[u8]) -> Result<CustomResourceDefinition> {
    let crd = match parse_json(src) {
        Ok(crd) => crd,
        Err(_) => parse_yaml(src)?,
    };

    if !crd.kind.is_empty() && crd.kind != "CustomResourceDefinition" {
        return Err(CrdError::WrongKind {
            kind: crd.kind.clone(),
        });
    }

    Ok(crd)
}

fn parse_json(src: &[u8]) -> std::result::Result<CustomResourceDefinition, serde_json::Error> {
    serde_json::from_slice(src)
}

fn parse_yaml(src: &[u8]) -> Result<CustomResourceDefinition> {
    serde_yaml::from_slice(src).map_err(CrdError::Parse)
}
