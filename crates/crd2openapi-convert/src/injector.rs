//! Default GVK injection
//!
//! Stamps default `apiVersion`/`kind` values onto the component schemas
//! that represent the CRD's own resource versions. The validation schema is
//! already correct without this; pre-filled discriminators are a
//! convenience for clients constructing creation requests.

use serde_json::Value;

use crd2openapi_core::{CustomResourceDefinition, GroupVersionKind};

use crate::builder::reverse_group;
use crate::document::{Schema, SchemaDocument};

/// Inject default `apiVersion`/`kind` values into `doc` in place.
///
/// Component names are matched against `<reversed group>.<version>.<Kind>`
/// for every declared version; everything else under the group prefix
/// (nested types, list types) is left alone. Legacy documents have no
/// component registry and pass through unmodified. Re-running overwrites
/// the same defaults, so the operation is idempotent.
pub fn inject_default_gvk(doc: &mut SchemaDocument, crd: &CustomResourceDefinition) {
    let Some(schemas) = doc.component_schemas_mut() else {
        return;
    };

    let prefix = format!("{}.", reverse_group(&crd.spec.group));
    let kind = &crd.spec.names.kind;

    for (name, schema) in schemas.iter_mut() {
        let Some(suffix) = name.strip_prefix(&prefix) else {
            // Not part of our API group.
            continue;
        };

        for version in &crd.spec.versions {
            if suffix != format!("{}.{}", version.name, kind) {
                // Not our version or kind.
                continue;
            }

            let gvk = GroupVersionKind {
                group: crd.spec.group.clone(),
                version: version.name.clone(),
                kind: kind.clone(),
            };
            set_property_default(schema, "apiVersion", Value::String(gvk.api_version()));
            set_property_default(schema, "kind", Value::String(gvk.kind.clone()));
        }
    }
}

/// Overwrite a property's default; absent properties cause no change.
fn set_property_default(schema: &mut Schema, property: &str, value: Value) {
    if let Some(property) = schema.properties.get_mut(property) {
        property.default = Some(value);
    }
}
