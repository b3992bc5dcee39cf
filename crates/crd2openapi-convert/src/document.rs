//! OpenAPI document model
//!
//! Typed trees for the two output shapes: the current OpenAPI v3 form with
//! a `components.schemas` registry, and the legacy Swagger 2.0 form with
//! top-level `definitions`. Schema nodes type the fields the pipeline reads
//! and writes; every other validation keyword passes through a flattened
//! map untouched. All maps are insertion-ordered so serialized key order is
//! deterministic and follows the builder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated schema document, in either output shape.
///
/// Only the v3 variant exposes a component registry; the legacy variant is
/// opaque to post-processing and passes through unmodified.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    OpenApiV3(OpenApiV3Document),
    Swagger(SwaggerDocument),
}

impl SchemaDocument {
    /// Whether this is the legacy Swagger 2.0 shape.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Swagger(_))
    }

    /// The named component schemas, when the shape has a registry.
    pub fn component_schemas(&self) -> Option<&IndexMap<String, Schema>> {
        match self {
            Self::OpenApiV3(doc) => Some(&doc.components.schemas),
            Self::Swagger(_) => None,
        }
    }

    /// Mutable access to the component registry. Returns `None` for legacy
    /// documents, which have no equivalent registry to mutate.
    pub fn component_schemas_mut(&mut self) -> Option<&mut IndexMap<String, Schema>> {
        match self {
            Self::OpenApiV3(doc) => Some(&mut doc.components.schemas),
            Self::Swagger(_) => None,
        }
    }
}

/// OpenAPI v3 document.
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiV3Document {
    /// Spec version, "3.0.0"
    pub openapi: String,
    pub info: Info,
    pub paths: IndexMap<String, Value>,
    pub components: Components,
}

/// Legacy Swagger 2.0 document.
#[derive(Debug, Clone, Serialize)]
pub struct SwaggerDocument {
    /// Spec version, "2.0"
    pub swagger: String,
    pub info: Info,
    pub paths: IndexMap<String, Value>,
    pub definitions: IndexMap<String, Schema>,
}

/// Document info section.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// The reusable schema registry of a v3 document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
}

/// One node of an OpenAPI schema tree.
///
/// Fields the pipeline touches are typed; anything else a CRD validation
/// schema carries (`enum`, `pattern`, `nullable`, `additionalProperties`,
/// `x-kubernetes-*`, ...) round-trips through `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Schema {
    /// A plain string property.
    pub fn string(description: impl Into<String>) -> Self {
        Schema {
            schema_type: Some("string".to_string()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// A plain object property.
    pub fn object(description: impl Into<String>) -> Self {
        Schema {
            schema_type: Some("object".to_string()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// A reference to another named schema.
    pub fn reference(target: impl Into<String>) -> Self {
        Schema {
            reference: Some(target.into()),
            ..Default::default()
        }
    }
}
