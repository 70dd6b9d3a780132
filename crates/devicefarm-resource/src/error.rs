//! Error types for the upload resource
//!
//! Remote failures are wrapped with the operation and the upload they concern.
//! Not-found is only an error where it cannot be recovered locally: reads of
//! a record that was just created, updates, and import.

use devicefarm_client::ApiError;
use devicefarm_core::{ArnError, ErrorMetadata, LogLevel};
use thiserror::Error;

/// Failure to derive a project ARN from an upload ARN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Error parsing '{value}': {source}")]
    Parse {
        value: String,
        #[source]
        source: ArnError,
    },

    #[error("Unexpected format of ID ({resource:?}), expected project-id/upload-id")]
    UnexpectedFormat { resource: String },
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Invalid upload configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Error creating Device Farm upload: {source}")]
    Create {
        #[source]
        source: ApiError,
    },

    #[error("Error reading Device Farm upload ({id}): {source}")]
    Read {
        id: String,
        #[source]
        source: ApiError,
    },

    #[error("Error updating Device Farm upload ({id}): {source}")]
    Update {
        id: String,
        #[source]
        source: ApiError,
    },

    #[error("Error deleting Device Farm upload ({id}): {source}")]
    Delete {
        id: String,
        #[source]
        source: ApiError,
    },

    #[error("Error decoding project_arn ({arn}): {source}")]
    DecodeProjectArn {
        arn: String,
        #[source]
        source: DecodeError,
    },

    #[error("Cannot change {} of upload ({id}) in place; it must be replaced", .fields.join(", "))]
    RequiresReplacement {
        id: String,
        fields: Vec<&'static str>,
    },

    #[error("Cannot import non-existent remote object ({0})")]
    ImportNotFound(String),

    #[error("Upload record has no identifier")]
    MissingId,
}

impl ResourceError {
    /// The remote error behind this failure, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ResourceError::Create { source }
            | ResourceError::Read { source, .. }
            | ResourceError::Update { source, .. }
            | ResourceError::Delete { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ErrorMetadata for ResourceError {
    fn error_code(&self) -> &'static str {
        match self {
            ResourceError::Validation(_) => "INVALID_CONFIGURATION",
            ResourceError::Create { .. } => "CREATE_FAILED",
            ResourceError::Read { .. } => "READ_FAILED",
            ResourceError::Update { .. } => "UPDATE_FAILED",
            ResourceError::Delete { .. } => "DELETE_FAILED",
            ResourceError::DecodeProjectArn { .. } => "INVALID_UPLOAD_ARN",
            ResourceError::RequiresReplacement { .. } => "REQUIRES_REPLACEMENT",
            ResourceError::ImportNotFound(_) => "IMPORT_NOT_FOUND",
            ResourceError::MissingId => "MISSING_ID",
        }
    }

    fn is_recoverable(&self) -> bool {
        self.api_error().is_some_and(|e| e.is_recoverable())
    }

    fn log_level(&self) -> LogLevel {
        match self {
            ResourceError::Validation(_)
            | ResourceError::RequiresReplacement { .. }
            | ResourceError::ImportNotFound(_) => LogLevel::Debug,
            _ => self.api_error().map_or(LogLevel::Error, |e| e.log_level()),
        }
    }
}

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;
