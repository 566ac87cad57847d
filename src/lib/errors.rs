use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// A string list source could not be turned into a usable list.
///
/// Never reaches MCP clients: providers replace the list with their fallback.
#[derive(Debug, Error)]
pub enum SourceUnavailable {
    #[error("Failed to read string list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("String list {path} is not a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("String list {path} has no usable entries: {message}")]
    Empty { path: PathBuf, message: String },
}

impl SourceUnavailable {
    pub fn path(&self) -> &PathBuf {
        match self {
            SourceUnavailable::Io { path, .. }
            | SourceUnavailable::Parse { path, .. }
            | SourceUnavailable::Empty { path, .. } => path,
        }
    }
}

/// Structured error metadata returned by MCP tools.
#[derive(Debug, Clone, Serialize)]
pub struct ToolErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl ToolErrorDescriptor {
    /// Simple constructor.
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    /// Create a builder.
    pub fn builder(&self) -> ToolErrorDescriptorBuilder<'_> {
        ToolErrorDescriptorBuilder::new(self)
    }
}

/// MCP error class the descriptor is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    ResourceNotFound,
}

/// Builder for error data that fails if required fields are missing.
pub struct ToolErrorDescriptorBuilder<'a> {
    descriptor: &'a ToolErrorDescriptor,
    kind: ErrorKind,
    retryable: Option<bool>,
    details: Option<Value>,
}

impl<'a> ToolErrorDescriptorBuilder<'a> {
    pub fn new(descriptor: &'a ToolErrorDescriptor) -> Self {
        Self {
            descriptor,
            kind: ErrorKind::InvalidParams,
            retryable: None,
            details: None,
        }
    }

    pub fn kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn build(self) -> Result<ErrorData, ToolErrorBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(ToolErrorBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }
        let retryable = self
            .retryable
            .ok_or(ToolErrorBuilderError::MissingRetryable {
                code: self.descriptor.code,
            })?;

        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.descriptor.code.into()));
        data.insert(
            "remediation".into(),
            Value::String(self.descriptor.remediation.into()),
        );
        data.insert("retryable".into(), Value::Bool(retryable));
        if let Some(details) = self.details {
            data.insert("details".into(), details);
        }

        let data = Some(Value::Object(data));
        Ok(match self.kind {
            ErrorKind::InvalidParams => ErrorData::invalid_params(self.descriptor.message, data),
            ErrorKind::ResourceNotFound => {
                ErrorData::resource_not_found(self.descriptor.message, data)
            }
        })
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolErrorBuilderError {
    #[error("retryable is missing (code={code})")]
    MissingRetryable { code: &'static str },
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// Build `ErrorData` for a descriptor, degrading to a plain internal error if
/// the descriptor itself is malformed.
pub fn descriptor_error(
    descriptor: &'static ToolErrorDescriptor,
    kind: ErrorKind,
    retryable: bool,
    details: Value,
) -> ErrorData {
    descriptor
        .builder()
        .kind(kind)
        .retryable(retryable)
        .details(details)
        .build()
        .unwrap_or_else(|err| ErrorData::internal_error(err.to_string(), None))
}

/// `multiply` result does not fit in a signed 64-bit integer.
pub const MULTIPLY_OVERFLOW_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "MULTIPLY_OVERFLOW",
    "The product does not fit in a signed 64-bit integer",
    "Use smaller operands so that a * b stays within i64 range.",
);

/// `greeting://` was requested without a name.
pub const GREETING_NAME_REQUIRED_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "GREETING_NAME_REQUIRED",
    "greeting:// resources require a name",
    "Request a URI of the form greeting://{name}, for example greeting://Ada.",
);

/// Resource URI does not match any template served here.
pub const RESOURCE_NOT_FOUND_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "RESOURCE_NOT_FOUND",
    "No resource matches the requested URI",
    "List resource templates and request a URI matching greeting://{name}.",
);
