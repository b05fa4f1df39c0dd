//! `AWS::AutoScaling::AutoScalingGroup` property types.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// CloudFormation resource type of an Auto Scaling group.
pub const AUTO_SCALING_GROUP_RESOURCE_TYPE: &str = "AWS::AutoScaling::AutoScalingGroup";

cdkstack_core::cfn_literal_enum! {
    /// How the group decides an instance is unhealthy.
    #[derive(Default)]
    HealthCheckType {
        /// EC2 status checks.
        #[default]
        Ec2 => "EC2",
        /// Load balancer health checks.
        Elb => "ELB",
    }
}

/// A tag applied to the group and optionally to the instances it launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagProperty {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
    /// Copy the tag to launched instances.
    pub propagate_at_launch: bool,
}

/// Properties of an `AWS::AutoScaling::AutoScalingGroup` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct AutoScalingGroupProperties {
    #[builder(setter(into))]
    pub min_size: String,

    #[builder(setter(into))]
    pub max_size: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<String>,

    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,

    /// Seconds between scaling activities.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<String>,

    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,

    /// Subnet ids to launch instances in.
    #[builder(default)]
    #[serde(
        rename = "VPCZoneIdentifier",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub vpc_zone_identifier: Vec<String>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_names: Vec<String>,

    #[builder(default)]
    #[serde(
        rename = "TargetGroupARNs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub target_group_arns: Vec<String>,

    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<HealthCheckType>,

    /// Seconds before health checks start on a new instance.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<u32>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagProperty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_required_sizes_as_strings() {
        let props = AutoScalingGroupProperties::builder()
            .min_size("1")
            .max_size("3")
            .build();
        let json = serde_json::to_string(&props).expect("serialize AutoScalingGroupProperties");
        assert_eq!(json, r#"{"MinSize":"1","MaxSize":"3"}"#);
    }

    #[test]
    fn test_should_use_schema_names_for_acronym_properties() {
        let props = AutoScalingGroupProperties::builder()
            .min_size("0")
            .max_size("10")
            .vpc_zone_identifier(vec!["subnet-1".to_owned(), "subnet-2".to_owned()])
            .target_group_arns(vec!["arn:aws:elasticloadbalancing:tg".to_owned()])
            .health_check_type(HealthCheckType::Elb)
            .health_check_grace_period(300)
            .build();
        let value = serde_json::to_value(&props).expect("serialize AutoScalingGroupProperties");
        assert_eq!(value["VPCZoneIdentifier"][1], "subnet-2");
        assert_eq!(value["TargetGroupARNs"][0], "arn:aws:elasticloadbalancing:tg");
        assert_eq!(value["HealthCheckType"], "ELB");
        assert_eq!(value["HealthCheckGracePeriod"], 300);
    }

    #[test]
    fn test_should_default_to_ec2_health_checks() {
        assert_eq!(HealthCheckType::default(), HealthCheckType::Ec2);
        assert_eq!(HealthCheckType::default().to_string(), "EC2");
        let parsed: HealthCheckType = serde_json::from_str(r#""ELB""#).expect("parse ELB");
        assert_eq!(parsed.as_str(), "ELB");
    }

    #[test]
    fn test_should_serialize_tags() {
        let tag = TagProperty {
            key: "team".to_owned(),
            value: "payments".to_owned(),
            propagate_at_launch: true,
        };
        let json = serde_json::to_string(&tag).expect("serialize TagProperty");
        assert_eq!(
            json,
            r#"{"Key":"team","Value":"payments","PropagateAtLaunch":true}"#
        );
    }
}
