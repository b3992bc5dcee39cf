//! CustomResourceDefinition data model
//!
//! A deliberately small projection of the `apiextensions.k8s.io/v1` CRD
//! shape: the fields version resolution and schema building actually read.
//! The per-version validation schema is carried as a raw JSON value and
//! handed to the schema builder untouched.

use serde::Deserialize;
use serde_json::Value;

/// A parsed CustomResourceDefinition document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinition {
    /// API version of the CRD manifest itself (e.g. "apiextensions.k8s.io/v1")
    #[serde(default)]
    pub api_version: String,

    /// Manifest kind; "CustomResourceDefinition" when present
    #[serde(default)]
    pub kind: String,

    /// Object metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// The CRD spec
    pub spec: CrdSpec,
}

impl CustomResourceDefinition {
    /// Names of all declared versions, in declaration order.
    pub fn version_names(&self) -> Vec<String> {
        self.spec.versions.iter().map(|v| v.name.clone()).collect()
    }

    /// Look up a declared version by name.
    pub fn version(&self, name: &str) -> Option<&CrdVersion> {
        self.spec.versions.iter().find(|v| v.name == name)
    }

    /// Get the storage version, if one is marked.
    pub fn storage_version(&self) -> Option<&CrdVersion> {
        self.spec.versions.iter().find(|v| v.storage)
    }
}

/// Object metadata; only the name matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    /// Full CRD name (e.g. "clusters.eks.aws.upbound.io")
    #[serde(default)]
    pub name: String,
}

/// The `spec` section of a CRD.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdSpec {
    /// API group (e.g. "eks.aws.upbound.io")
    pub group: String,

    /// Resource names (kind, plural, ...)
    pub names: CrdNames,

    /// Resource scope
    #[serde(default)]
    pub scope: CrdScope,

    /// Declared API versions, in declaration order
    #[serde(default)]
    pub versions: Vec<CrdVersion>,
}

/// CRD naming information.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdNames {
    /// Kind (e.g. "Cluster")
    pub kind: String,

    /// Plural name (e.g. "clusters")
    #[serde(default)]
    pub plural: String,

    /// Singular name
    #[serde(default)]
    pub singular: Option<String>,

    /// Short names for kubectl
    #[serde(default)]
    pub short_names: Vec<String>,

    /// List kind (e.g. "ClusterList")
    #[serde(default)]
    pub list_kind: Option<String>,

    /// Categories for grouping in kubectl
    #[serde(default)]
    pub categories: Vec<String>,
}

/// CRD scope - whether resources are namespaced or cluster-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CrdScope {
    #[default]
    Namespaced,
    Cluster,
}

/// A single declared API version of a CRD.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdVersion {
    /// Version name (e.g. "v1", "v1beta2", "v2alpha1")
    pub name: String,

    /// Whether this version is served by the API server
    #[serde(default = "default_true")]
    pub served: bool,

    /// Whether this is the storage version
    #[serde(default)]
    pub storage: bool,

    /// Whether this version is deprecated
    #[serde(default)]
    pub deprecated: bool,

    /// Deprecation warning message
    #[serde(default)]
    pub deprecation_warning: Option<String>,

    /// Validation schema holder
    #[serde(default)]
    pub schema: Option<VersionSchema>,
}

impl CrdVersion {
    /// The raw `openAPIV3Schema` value, if this version declares one.
    pub fn open_api_v3_schema(&self) -> Option<&Value> {
        self.schema.as_ref().and_then(|s| s.open_api_v3_schema.as_ref())
    }
}

/// The `schema` holder of a version entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionSchema {
    /// Raw structural schema; passed to the builder untouched
    #[serde(default, rename = "openAPIV3Schema")]
    pub open_api_v3_schema: Option<Value>,
}

fn default_true() -> bool {
    true
}

/// Group/Version/Kind triple identifying a versioned resource type.
///
/// Derived on demand to compute injected default values; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    /// The `apiVersion` value for this GVK: `"<group>/<version>"`, or just
    /// `"<version>"` for the empty (core) group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}
