//! Conversion pipeline
//!
//! One flag-parameterized path: parse the input bytes as a CRD, resolve the
//! target version, hand off to the schema builder, optionally inject
//! default GVK values, and serialize. Fail-fast: any stage error aborts the
//! conversion with no partial output.

use std::io;

use crd2openapi_core::{parse_crd, resolve_version};

use crate::builder::{BuildOptions, SchemaBuilder, StructuralSchemaBuilder};
use crate::document::SchemaDocument;
use crate::error::{ConvertError, Result};
use crate::injector::inject_default_gvk;

/// Options for a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Version to convert; resolved to the greatest declared version when unset.
    pub version: Option<String>,

    /// Emit the legacy Swagger 2.0 shape instead of OpenAPI v3.
    pub legacy: bool,

    /// Stamp default `apiVersion`/`kind` values onto the custom resource
    /// schemas. Only effective for the v3 shape; legacy documents have no
    /// component registry to mutate.
    pub inject_default_gvk: bool,
}

/// Converts one CRD document to a schema document.
pub struct Converter<B = StructuralSchemaBuilder> {
    builder: B,
    options: ConvertOptions,
}

impl Converter<StructuralSchemaBuilder> {
    /// A converter using the default structural builder.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_builder(StructuralSchemaBuilder, options)
    }
}

impl<B: SchemaBuilder> Converter<B> {
    /// A converter with a substituted schema builder.
    pub fn with_builder(builder: B, options: ConvertOptions) -> Self {
        Self { builder, options }
    }

    /// Run the full pipeline over one input document.
    pub fn convert(&self, src: &[u8]) -> Result<SchemaDocument> {
        let crd = parse_crd(src)?;
        let version = resolve_version(&crd.version_names(), self.options.version.as_deref())?;

        if let Some(entry) = crd.version(&version)
            && entry.deprecated
        {
            match entry.deprecation_warning.as_deref() {
                Some(warning) => tracing::warn!("version {} is deprecated: {}", version, warning),
                None => tracing::warn!("version {} is deprecated", version),
            }
        }

        tracing::debug!(
            "building {} document for version {}",
            if self.options.legacy { "Swagger 2.0" } else { "OpenAPI v3" },
            version
        );

        let mut doc = self.builder.build(
            &crd,
            &version,
            &BuildOptions {
                legacy: self.options.legacy,
            },
        )?;

        if self.options.inject_default_gvk {
            inject_default_gvk(&mut doc, &crd);
        }

        Ok(doc)
    }

    /// Convert and serialize to a sink in one step.
    pub fn convert_to_writer(&self, src: &[u8], out: impl io::Write) -> Result<()> {
        write_document(&self.convert(src)?, out)
    }
}

/// Convert a CRD document with the default structural builder.
pub fn convert(src: &[u8], options: ConvertOptions) -> Result<SchemaDocument> {
    Converter::new(options).convert(src)
}

/// Serialize a schema document as pretty-printed JSON (two-space indent,
/// builder key order) with a trailing newline.
pub fn write_document(doc: &SchemaDocument, mut out: impl io::Write) -> Result<()> {
    // Whole-document semantics: buffering keeps serializer errors distinct
    // from sink errors.
    let json = serde_json::to_vec_pretty(doc).map_err(ConvertError::Serialize)?;
    out.write_all(&json).map_err(ConvertError::Output)?;
    out.write_all(b"\n").map_err(ConvertError::Output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Components, Info, OpenApiV3Document};
    use crate::error::BuildError;
    use crd2openapi_core::{CrdError, CustomResourceDefinition};
    use indexmap::IndexMap;
    use serde_json::Value;

    const CLUSTER_CRD: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: clusters.eks.aws.upbound.io
spec:
  group: eks.aws.upbound.io
  names:
    kind: Cluster
    plural: clusters
  versions:
    - name: v1beta1
      served: true
      storage: false
      schema:
        openAPIV3Schema:
          type: object
    - name: v1beta2
      served: true
      storage: true
      schema:
        openAPIV3Schema:
          type: object
          properties:
            spec:
              type: object
"#;

    /// Returns a fixed empty document no matter the input.
    struct StubBuilder;

    impl SchemaBuilder for StubBuilder {
        fn build(
            &self,
            _crd: &CustomResourceDefinition,
            version: &str,
            _options: &BuildOptions,
        ) -> std::result::Result<SchemaDocument, BuildError> {
            Ok(SchemaDocument::OpenApiV3(OpenApiV3Document {
                openapi: "3.0.0".to_string(),
                info: Info {
                    title: "stub".to_string(),
                    version: version.to_string(),
                },
                paths: IndexMap::new(),
                components: Components::default(),
            }))
        }
    }

    /// Always fails, to exercise error propagation.
    struct FailingBuilder;

    impl SchemaBuilder for FailingBuilder {
        fn build(
            &self,
            _crd: &CustomResourceDefinition,
            _version: &str,
            _options: &BuildOptions,
        ) -> std::result::Result<SchemaDocument, BuildError> {
            Err(BuildError::Other("backend unavailable".to_string()))
        }
    }

    #[test]
    fn test_pipeline_with_default_builder() {
        let doc = convert(CLUSTER_CRD.as_bytes(), ConvertOptions::default()).unwrap();
        let schemas = doc.component_schemas().unwrap();
        // No request: the greatest declared version (tie broken by
        // declaration order) is converted.
        assert!(schemas.contains_key("io.upbound.aws.eks.v1beta2.Cluster"));
    }

    #[test]
    fn test_pipeline_with_requested_version() {
        let options = ConvertOptions {
            version: Some("v1beta1".to_string()),
            ..Default::default()
        };
        let doc = convert(CLUSTER_CRD.as_bytes(), options).unwrap();
        let schemas = doc.component_schemas().unwrap();
        assert!(schemas.contains_key("io.upbound.aws.eks.v1beta1.Cluster"));
    }

    #[test]
    fn test_pipeline_injects_when_requested() {
        let options = ConvertOptions {
            inject_default_gvk: true,
            ..Default::default()
        };
        let doc = convert(CLUSTER_CRD.as_bytes(), options).unwrap();
        let schemas = doc.component_schemas().unwrap();
        let cluster = &schemas["io.upbound.aws.eks.v1beta2.Cluster"];
        assert_eq!(
            cluster.properties["apiVersion"].default,
            Some(Value::String("eks.aws.upbound.io/v1beta2".to_string()))
        );
    }

    #[test]
    fn test_pipeline_skips_injection_for_legacy_output() {
        let options = ConvertOptions {
            legacy: true,
            inject_default_gvk: true,
            ..Default::default()
        };
        let doc = convert(CLUSTER_CRD.as_bytes(), options).unwrap();
        assert!(doc.is_legacy());

        let value = serde_json::to_value(&doc).unwrap();
        let cluster = &value["definitions"]["io.upbound.aws.eks.v1beta2.Cluster"];
        // The legacy document is exactly as built: no defaults stamped.
        assert!(cluster["properties"]["apiVersion"].get("default").is_none());
        assert!(cluster["properties"]["kind"].get("default").is_none());
    }

    #[test]
    fn test_stub_builder_substitution() {
        let converter = Converter::with_builder(StubBuilder, ConvertOptions::default());
        let doc = converter.convert(CLUSTER_CRD.as_bytes()).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["info"]["title"], "stub");
        assert_eq!(value["info"]["version"], "v1beta2");
    }

    #[test]
    fn test_builder_error_propagates_verbatim() {
        let converter = Converter::with_builder(FailingBuilder, ConvertOptions::default());
        let err = converter.convert(CLUSTER_CRD.as_bytes()).unwrap_err();
        match err {
            ConvertError::Build(BuildError::Other(message)) => {
                assert_eq!(message, "backend unavailable");
            }
            other => panic!("expected Build error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_version_propagates() {
        let options = ConvertOptions {
            version: Some("v9".to_string()),
            ..Default::default()
        };
        let err = convert(CLUSTER_CRD.as_bytes(), options).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Crd(CrdError::UnknownVersion { .. })
        ));
    }

    #[test]
    fn test_no_versions_propagates() {
        let src = b"spec:\n  group: example.com\n  names:\n    kind: Widget\n  versions: []\n";
        let err = convert(src, ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Crd(CrdError::NoVersions)));
    }

    #[test]
    fn test_write_document_format() {
        let doc = convert(CLUSTER_CRD.as_bytes(), ConvertOptions::default()).unwrap();
        let mut out = Vec::new();
        write_document(&doc, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Two-space indentation, trailing newline, and it parses back.
        assert!(text.starts_with("{\n  \"openapi\": \"3.0.0\","));
        assert!(text.ends_with("}\n"));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["openapi"], "3.0.0");
    }

    #[test]
    fn test_write_document_reports_sink_errors() {
        /// A sink that always fails.
        struct BrokenPipe;

        impl io::Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let doc = convert(CLUSTER_CRD.as_bytes(), ConvertOptions::default()).unwrap();
        let err = write_document(&doc, BrokenPipe).unwrap_err();
        assert!(matches!(err, ConvertError::Output(_)));
    }

    #[test]
    fn test_convert_to_writer() {
        let converter = Converter::new(ConvertOptions::default());
        let mut out = Vec::new();
        converter
            .convert_to_writer(CLUSTER_CRD.as_bytes(), &mut out)
            .unwrap();
        assert!(!out.is_empty());
    }
}
