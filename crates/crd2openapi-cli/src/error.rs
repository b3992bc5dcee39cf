//! CLI error types with exit code handling
//!
//! Buckets pipeline errors into the CLI's exit-code taxonomy and attaches
//! "did you mean" help to unknown-version failures.

use miette::Diagnostic;
use thiserror::Error;

use crd2openapi_convert::ConvertError;
use crd2openapi_core::CrdError;

use crate::exit_codes;

/// Maximum Levenshtein distance to consider for suggestions
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Input could not be parsed as a CRD
    #[error("{message}")]
    #[diagnostic(code(crd2openapi::parse))]
    Parse { message: String },

    /// Version resolution failed
    #[error("{message}")]
    #[diagnostic(code(crd2openapi::version))]
    Version {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The schema builder rejected the CRD
    #[error("{message}")]
    #[diagnostic(code(crd2openapi::build))]
    Build { message: String },

    /// Reading stdin or writing stdout failed
    #[error("IO error: {message}")]
    #[diagnostic(code(crd2openapi::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse { .. } => exit_codes::PARSE_ERROR,
            CliError::Version { .. } => exit_codes::VERSION_ERROR,
            CliError::Build { .. } => exit_codes::BUILD_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<CrdError> for CliError {
    fn from(err: CrdError) -> Self {
        match &err {
            CrdError::Parse(_) | CrdError::WrongKind { .. } => CliError::Parse {
                message: err.to_string(),
            },
            CrdError::NoVersions => CliError::Version {
                message: err.to_string(),
                help: None,
            },
            CrdError::UnknownVersion {
                requested,
                declared,
            } => CliError::Version {
                help: closest_version(requested, declared)
                    .map(|version| format!("did you mean `{version}`?")),
                message: err.to_string(),
            },
        }
    }
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Crd(crd) => crd.into(),
            ConvertError::Build(build) => CliError::Build {
                message: build.to_string(),
            },
            other @ (ConvertError::Serialize(_) | ConvertError::Output(_)) => CliError::Io {
                message: other.to_string(),
            },
        }
    }
}

/// Find the declared version closest to the requested one.
fn closest_version<'a>(requested: &str, declared: &'a [String]) -> Option<&'a str> {
    declared
        .iter()
        .map(|version| (strsim::levenshtein(requested, version), version))
        .filter(|(distance, _)| (1..=MAX_SUGGESTION_DISTANCE).contains(distance))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, version)| version.as_str())
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
