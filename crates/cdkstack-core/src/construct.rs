//! Construct traits.

use std::fmt;

use crate::error::CdkResult;
use crate::node::Node;

/// A node in the construct tree.
pub trait Construct {
    /// The tree node of this construct.
    fn node(&self) -> &Node;

    /// Soft validation run at synthesis time.
    ///
    /// Returns human-readable messages; an empty list means the construct is
    /// valid. Synthesis aborts if any construct returns messages.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A construct that renders to one entry in a template's `Resources`.
pub trait CfnResource: Construct + fmt::Debug {
    /// The node the template resource is emitted for.
    ///
    /// Higher-level constructs wrap their resource in a `Resource` child and
    /// override this; plain resource bindings use their own node.
    fn resource_node(&self) -> &Node {
        self.node()
    }

    /// CloudFormation resource type, e.g. `AWS::DynamoDB::Table`.
    fn resource_type(&self) -> &'static str;

    /// Key of the resource in the template.
    fn logical_id(&self) -> &str;

    /// The resource's `Properties` object.
    fn render_properties(&self) -> CdkResult<serde_json::Value>;
}
