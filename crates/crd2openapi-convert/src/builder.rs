//! Schema building
//!
//! `SchemaBuilder` is the seam between version resolution and document
//! output: the pipeline treats any implementation as a black box and
//! propagates its errors verbatim, which keeps the rest of the pipeline
//! testable against stubs.
//!
//! `StructuralSchemaBuilder` is the default implementation. It lifts the
//! selected version's `openAPIV3Schema` into a component named after the
//! reversed DNS group (`eks.aws.upbound.io` + `v1beta2` + `Cluster` →
//! `io.upbound.aws.eks.v1beta2.Cluster`), the convention the injection
//! step keys on.

use indexmap::IndexMap;
use serde_json::json;

use crd2openapi_core::{CustomResourceDefinition, GroupVersionKind};

use crate::document::{
    Components, Info, OpenApiV3Document, Schema, SchemaDocument, SwaggerDocument,
};
use crate::error::BuildError;

/// Builder configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Emit the legacy Swagger 2.0 shape instead of OpenAPI v3.
    pub legacy: bool,
}

/// Produces a schema document for one CRD version.
pub trait SchemaBuilder {
    fn build(
        &self,
        crd: &CustomResourceDefinition,
        version: &str,
        options: &BuildOptions,
    ) -> Result<SchemaDocument, BuildError>;
}

/// Reverse the dot-separated labels of an API group.
///
/// `eks.aws.upbound.io` → `io.upbound.aws.eks`. Generated schema names are
/// rooted at the reversed group.
pub fn reverse_group(group: &str) -> String {
    group.split('.').rev().collect::<Vec<_>>().join(".")
}

/// Default builder: a structural lift of the CRD's own validation schema.
pub struct StructuralSchemaBuilder;

impl SchemaBuilder for StructuralSchemaBuilder {
    fn build(
        &self,
        crd: &CustomResourceDefinition,
        version: &str,
        options: &BuildOptions,
    ) -> Result<SchemaDocument, BuildError> {
        let entry = crd.version(version).ok_or_else(|| BuildError::UnknownVersion {
            version: version.to_string(),
        })?;
        let raw = entry
            .open_api_v3_schema()
            .ok_or_else(|| BuildError::MissingSchema {
                version: version.to_string(),
            })?;
        let mut schema: Schema =
            serde_json::from_value(raw.clone()).map_err(|source| BuildError::InvalidSchema {
                version: version.to_string(),
                source,
            })?;

        let kind = crd.spec.names.kind.clone();
        let gvk = GroupVersionKind {
            group: crd.spec.group.clone(),
            version: version.to_string(),
            kind: kind.clone(),
        };

        ensure_discriminators(&mut schema);
        schema.extra.insert(
            "x-kubernetes-group-version-kind".to_string(),
            json!([{"group": gvk.group, "kind": gvk.kind, "version": gvk.version}]),
        );

        let prefix = reverse_group(&crd.spec.group);
        let name = format!("{prefix}.{version}.{kind}");
        let list_kind = crd
            .spec
            .names
            .list_kind
            .clone()
            .unwrap_or_else(|| format!("{kind}List"));
        let list_name = format!("{prefix}.{version}.{list_kind}");
        let ref_base = if options.legacy {
            "#/definitions/"
        } else {
            "#/components/schemas/"
        };

        let mut schemas = IndexMap::new();
        let list = list_schema(&kind, &list_kind, format!("{ref_base}{name}"));
        schemas.insert(name, schema);
        schemas.insert(list_name, list);

        let info = Info {
            title: if crd.metadata.name.is_empty() {
                format!("{}.{}", crd.spec.names.plural, crd.spec.group)
            } else {
                crd.metadata.name.clone()
            },
            version: version.to_string(),
        };

        Ok(if options.legacy {
            SchemaDocument::Swagger(SwaggerDocument {
                swagger: "2.0".to_string(),
                info,
                paths: IndexMap::new(),
                definitions: schemas,
            })
        } else {
            SchemaDocument::OpenApiV3(OpenApiV3Document {
                openapi: "3.0.0".to_string(),
                info,
                paths: IndexMap::new(),
                components: Components { schemas },
            })
        })
    }
}

/// Guarantee the top-level discriminator properties exist so clients (and
/// the GVK injection step) always find them.
fn ensure_discriminators(schema: &mut Schema) {
    if schema.schema_type.is_none() {
        schema.schema_type = Some("object".to_string());
    }
    schema
        .properties
        .entry("apiVersion".to_string())
        .or_insert_with(|| Schema::string("API version of this object"));
    schema
        .properties
        .entry("kind".to_string())
        .or_insert_with(|| Schema::string("Kind of this object"));
    schema
        .properties
        .entry("metadata".to_string())
        .or_insert_with(|| Schema::object("Standard object metadata"));
}

/// The companion list schema: `items` references the resource schema.
fn list_schema(kind: &str, list_kind: &str, item_ref: String) -> Schema {
    let mut list = Schema::object(format!("{list_kind} is a list of {kind}"));
    list.properties
        .insert("apiVersion".to_string(), Schema::string("API version of this object"));
    list.properties
        .insert("kind".to_string(), Schema::string("Kind of this object"));
    list.properties
        .insert("metadata".to_string(), Schema::object("Standard list metadata"));
    let mut items = Schema::default();
    items.schema_type = Some("array".to_string());
    items.items = Some(Box::new(Schema::reference(item_ref)));
    list.properties.insert("items".to_string(), items);
    list.required = vec!["items".to_string()];
    list
}
