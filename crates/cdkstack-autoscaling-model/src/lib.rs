//! Typed CloudFormation binding for `AWS::AutoScaling::AutoScalingGroup`.
//!
//! [`AutoScalingGroupProperties`] mirrors the resource schema and
//! [`CfnAutoScalingGroup`] places it in a construct tree. Sizes are strings
//! because the schema declares them that way.
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

pub mod group;
pub mod types;

pub use group::CfnAutoScalingGroup;
pub use types::{
    AUTO_SCALING_GROUP_RESOURCE_TYPE, AutoScalingGroupProperties, HealthCheckType, TagProperty,
};
