//! The `CfnAutoScalingGroup` resource binding.

use cdkstack_core::{CdkResult, CfnResource, Construct, Node, Reference};

use crate::types::{AUTO_SCALING_GROUP_RESOURCE_TYPE, AutoScalingGroupProperties};

/// An `AWS::AutoScaling::AutoScalingGroup` resource.
#[derive(Debug)]
pub struct CfnAutoScalingGroup {
    node: Node,
    logical_id: String,
    props: AutoScalingGroupProperties,
}

impl CfnAutoScalingGroup {
    /// Create the resource below `scope`.
    ///
    /// # Errors
    /// Returns an error if `id` is not a valid construct id.
    pub fn new(
        scope: &dyn Construct,
        id: impl Into<String>,
        props: AutoScalingGroupProperties,
    ) -> CdkResult<Self> {
        let node = scope.node().child(id)?;
        let logical_id = node.logical_id()?;
        Ok(Self {
            node,
            logical_id,
            props,
        })
    }

    /// The group's properties.
    #[must_use]
    pub fn props(&self) -> &AutoScalingGroupProperties {
        &self.props
    }

    /// The group name, resolved at deploy time.
    #[must_use]
    pub fn ref_name(&self) -> Reference {
        Reference::resource(&self.logical_id)
    }
}

impl Construct for CfnAutoScalingGroup {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl CfnResource for CfnAutoScalingGroup {
    fn resource_type(&self) -> &'static str {
        AUTO_SCALING_GROUP_RESOURCE_TYPE
    }

    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn render_properties(&self) -> CdkResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.props)?)
    }
}
