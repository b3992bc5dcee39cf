//! crd2openapi Convert - CRD to OpenAPI conversion pipeline
//!
//! This crate turns a parsed CustomResourceDefinition into an OpenAPI
//! document:
//!
//! - **Document model** (`document`): typed OpenAPI v3 / Swagger 2.0 trees
//!   with deterministic key order
//! - **Builder** (`builder`): the `SchemaBuilder` seam plus the default
//!   structural builder
//! - **Injection** (`injector`): default `apiVersion`/`kind` stamping for
//!   custom resource schemas
//! - **Pipeline** (`converter`): parse → resolve → build → inject → write,
//!   parameterized by `ConvertOptions`
//!
//! # Example
//!
//! ```no_run
//! use crd2openapi_convert::{convert, write_document, ConvertOptions};
//!
//! let src = std::fs::read("crd.yaml").unwrap();
//! let options = ConvertOptions {
//!     version: None, // resolve the greatest declared version
//!     legacy: false,
//!     inject_default_gvk: true,
//! };
//!
//! let doc = convert(&src, options).unwrap();
//! write_document(&doc, std::io::stdout().lock()).unwrap();
//! ```

pub mod builder;
pub mod converter;
pub mod document;
pub mod error;
pub mod injector;

// Re-exports
pub use builder::{BuildOptions, SchemaBuilder, StructuralSchemaBuilder, reverse_group};
pub use converter::{ConvertOptions, Converter, convert, write_document};
pub use document::{Components, Info, OpenApiV3Document, Schema, SchemaDocument, SwaggerDocument};
pub use error::{BuildError, ConvertError, Result};
