//! Table configuration errors.
//!
//! Every variant is fatal to the configuration phase: callers propagate with
//! `?` rather than retrying.

use cdkstack_core::CdkError;
use cdkstack_dynamodb_model::{KeyType, ScalarAttributeType};

/// Error raised while configuring a [`Table`](crate::Table).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A second key was assigned a role that is already taken.
    #[error("Unable to set {attribute} as a {key_type} key, because {existing} is a {key_type} key")]
    DuplicateKeyRole {
        /// The attribute that was being added.
        attribute: String,
        /// The contested role.
        key_type: KeyType,
        /// The attribute already holding the role.
        existing: String,
    },

    /// An attribute was redeclared with a different scalar type.
    #[error("Unable to specify {attribute} as {requested} because it was already defined as {existing}")]
    ConflictingAttributeType {
        /// The attribute name.
        attribute: String,
        /// The newly requested type.
        requested: ScalarAttributeType,
        /// The previously recorded type.
        existing: ScalarAttributeType,
    },

    /// Provisioned capacity must be a positive number of units.
    #[error("{field} must be a positive integer, got {value}")]
    InvalidCapacity {
        /// `readCapacity` or `writeCapacity`.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Construct tree error (invalid id, logical id derivation).
    #[error(transparent)]
    Construct(#[from] CdkError),
}

/// Convenience result type for table configuration.
pub type TableResult<T> = Result<T, TableError>;
