//! Error types for the CDKStack core.

use std::fmt;
use std::path::PathBuf;

/// Core error type for construct configuration and synthesis.
#[derive(Debug, thiserror::Error)]
pub enum CdkError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Construct ids must be non-empty and must not contain the path separator.
    #[error("invalid construct id '{0}': ids must be non-empty and cannot contain '/'")]
    InvalidConstructId(String),

    /// Stack names must be valid CloudFormation stack names.
    #[error("invalid stack name '{0}': must match [A-Za-z][A-Za-z0-9-]* and be at most 128 characters")]
    InvalidStackName(String),

    /// Two constructs with the same id (or logical id) registered in one scope.
    #[error("there is already a construct with id '{id}' in {scope}")]
    DuplicateConstructId {
        /// The conflicting id.
        id: String,
        /// Path of the scope the id collides in.
        scope: String,
    },

    /// A construct was added to a stack it does not belong to.
    #[error("construct '{path}' is not part of stack '{stack}'")]
    ScopeMismatch {
        /// Path of the construct being added.
        path: String,
        /// Name of the receiving stack.
        stack: String,
    },

    /// Logical ids need at least one path component.
    #[error("unable to calculate a unique id for an empty set of components")]
    EmptyLogicalId,

    /// One or more constructs reported validation errors during synthesis.
    #[error("Validation failed with the following errors:\n  {}", format_messages(.0))]
    Validation(Vec<ValidationMessage>),

    /// Failed to write a cloud assembly file.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for CDKStack operations.
pub type CdkResult<T> = Result<T, CdkError>;

/// A validation message attributed to the construct that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    /// Path of the construct reporting the problem.
    pub path: String,
    /// The human-readable message.
    pub message: String,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.path, self.message)
    }
}

fn format_messages(messages: &[ValidationMessage]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}
