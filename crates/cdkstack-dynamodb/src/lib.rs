//! DynamoDB table construct for CDKStack.
//!
//! [`Table`] accumulates a key schema and attribute definitions, enforces
//! that a table has at most one partition and one sort key and that attribute
//! types never conflict, and renders an `AWS::DynamoDB::Table` resource.
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod registry;
pub mod table;

pub use cdkstack_dynamodb_model::{KeyType, ScalarAttributeType, StreamViewType};
pub use error::TableError;
pub use registry::KeyRegistry;
pub use table::{Attribute, Table, TableProps};
