//! CloudFormation schema types for `AWS::DynamoDB::Table`.
//!
//! These mirror the resource specification one to one: structs serialize with
//! the `PascalCase` property names CloudFormation expects and enums serialize
//! to the exact wire literals (`HASH`, `S`, `NEW_IMAGE`, ...). There is no
//! behavior here; constructs in `cdkstack-dynamodb` build these values.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod types;

pub use types::{
    ATTR_ARN, ATTR_STREAM_ARN, AttributeDefinition, KeySchemaElement, KeyType,
    ProvisionedThroughput, ScalarAttributeType, StreamSpecification, StreamViewType,
    TABLE_RESOURCE_TYPE, TableProperties,
};
