//! Error types and exit codes for hydroroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad vertex ids)
//! - 3: Data error (unknown pipe, invalid network file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown pipe, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hydroroute operations
#[derive(Error, Debug)]
pub enum HydroError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("center {vertex} out of range (network has {vertex_count} centers)")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("pipe {from} -> {to} does not exist")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("invalid network{}: {reason}", describe_path(.path))]
    InvalidNetwork {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("extract from empty priority queue")]
    EmptyQueue,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl HydroError {
    /// Create an error for a rejected argument
    pub fn invalid_argument(reason: impl std::fmt::Display) -> Self {
        HydroError::InvalidArgument {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a center id outside the network
    pub fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        HydroError::OutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a pipe that was never added
    pub fn edge_not_found(from: VertexId, to: VertexId) -> Self {
        HydroError::EdgeNotFound { from, to }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HydroError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        HydroError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        HydroError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a network definition that cannot be built
    pub fn invalid_network(path: Option<&std::path::Path>, reason: impl Into<String>) -> Self {
        HydroError::InvalidNetwork {
            path: path.map(std::path::Path::to_path_buf),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            HydroError::UnknownFormat(_)
            | HydroError::UsageError(_)
            | HydroError::InvalidArgument { .. }
            | HydroError::OutOfRange { .. }
            | HydroError::InvalidValue { .. }
            | HydroError::Unsupported { .. } => ExitCode::Usage,

            // Data errors
            HydroError::EdgeNotFound { .. }
            | HydroError::InvalidNetwork { .. }
            | HydroError::AlreadyExists { .. } => ExitCode::Data,

            // Generic failures
            HydroError::EmptyQueue
            | HydroError::Io(_)
            | HydroError::Json(_)
            | HydroError::Toml(_)
            | HydroError::TomlSerialize(_)
            | HydroError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            HydroError::UnknownFormat(_) => "unknown_format",
            HydroError::UsageError(_) => "usage_error",
            HydroError::InvalidArgument { .. } => "invalid_argument",
            HydroError::OutOfRange { .. } => "out_of_range",
            HydroError::InvalidValue { .. } => "invalid_value",
            HydroError::Unsupported { .. } => "unsupported",
            HydroError::EdgeNotFound { .. } => "edge_not_found",
            HydroError::InvalidNetwork { .. } => "invalid_network",
            HydroError::AlreadyExists { .. } => "already_exists",
            HydroError::EmptyQueue => "empty_queue",
            HydroError::Io(_) => "io_error",
            HydroError::Json(_) => "json_error",
            HydroError::Toml(_) => "toml_error",
            HydroError::TomlSerialize(_) => "toml_error",
            HydroError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hydroroute operations
pub type Result<T> = std::result::Result<T, HydroError>;
