//! `AWS::DynamoDB::Table` property types.
//!
//! Field names serialize in `PascalCase`, the casing of the resource schema.
//! Enums carry their schema literal (`HASH`, `S`, `KEYS_ONLY`, ...) through
//! [`cdkstack_core::cfn_literal_enum!`].

use serde::{Deserialize, Serialize};

/// CloudFormation resource type of a DynamoDB table.
pub const TABLE_RESOURCE_TYPE: &str = "AWS::DynamoDB::Table";

/// `Fn::GetAtt` attribute holding the table ARN.
pub const ATTR_ARN: &str = "Arn";

/// `Fn::GetAtt` attribute holding the stream ARN.
pub const ATTR_STREAM_ARN: &str = "StreamArn";

cdkstack_core::cfn_literal_enum! {
    /// Role of an attribute in the key schema.
    KeyType {
        /// Partition key.
        Hash => "HASH",
        /// Sort key.
        Range => "RANGE",
    }
}

cdkstack_core::cfn_literal_enum! {
    /// Scalar types a key attribute may have.
    ScalarAttributeType {
        Binary => "B",
        Number => "N",
        String => "S",
    }
}

cdkstack_core::cfn_literal_enum! {
    /// Which item images a table stream records.
    StreamViewType {
        /// Item after the write.
        NewImage => "NEW_IMAGE",
        /// Item before the write.
        OldImage => "OLD_IMAGE",
        NewAndOldImages => "NEW_AND_OLD_IMAGES",
        /// Key attributes only.
        KeysOnly => "KEYS_ONLY",
    }
}

/// One `KeySchema` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: String,
    pub key_type: KeyType,
}

/// One `AttributeDefinitions` entry. Only key attributes are defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: String,
    pub attribute_type: ScalarAttributeType,
}

/// Read and write capacity units of a provisioned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// Stream settings; the property is omitted when no stream is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamSpecification {
    pub stream_view_type: StreamViewType,
}

/// `Properties` of an `AWS::DynamoDB::Table` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableProperties {
    /// Entries in the order the keys were added.
    pub key_schema: Vec<KeySchemaElement>,
    pub attribute_definitions: Vec<AttributeDefinition>,
    pub provisioned_throughput: ProvisionedThroughput,
    /// CloudFormation generates a name when this is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_key_schema_entry_in_schema_casing() {
        let entry = KeySchemaElement {
            attribute_name: "customer".to_owned(),
            key_type: KeyType::Range,
        };
        assert_eq!(
            serde_json::to_value(&entry).expect("serialize key schema entry"),
            serde_json::json!({ "AttributeName": "customer", "KeyType": "RANGE" })
        );
    }

    #[test]
    fn test_should_serialize_attribute_type_literals() {
        let literals: Vec<String> = [
            ScalarAttributeType::Binary,
            ScalarAttributeType::Number,
            ScalarAttributeType::String,
        ]
        .iter()
        .map(|t| serde_json::to_string(t).expect("serialize ScalarAttributeType"))
        .collect();
        assert_eq!(literals, [r#""B""#, r#""N""#, r#""S""#]);
    }

    #[test]
    fn test_should_match_display_and_wire_format_for_stream_view_types() {
        for view in [
            StreamViewType::NewImage,
            StreamViewType::OldImage,
            StreamViewType::NewAndOldImages,
            StreamViewType::KeysOnly,
        ] {
            let json = serde_json::to_string(&view).expect("serialize StreamViewType");
            assert_eq!(json, format!("\"{view}\""));
        }
    }

    #[test]
    fn test_should_reject_unknown_stream_view_type() {
        let parsed: Result<StreamViewType, _> = serde_json::from_str(r#""ALL_IMAGES""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_should_parse_throughput_from_template_json() {
        let throughput: ProvisionedThroughput =
            serde_json::from_str(r#"{"ReadCapacityUnits":3,"WriteCapacityUnits":7}"#)
                .expect("parse throughput");
        assert_eq!(throughput.read_capacity_units, 3);
        assert_eq!(throughput.write_capacity_units, 7);
    }

    #[test]
    fn test_should_skip_absent_table_name_and_stream() {
        let props = TableProperties {
            key_schema: vec![KeySchemaElement {
                attribute_name: String::from("id"),
                key_type: KeyType::Hash,
            }],
            attribute_definitions: vec![AttributeDefinition {
                attribute_name: String::from("id"),
                attribute_type: ScalarAttributeType::String,
            }],
            provisioned_throughput: ProvisionedThroughput {
                read_capacity_units: 5,
                write_capacity_units: 5,
            },
            table_name: None,
            stream_specification: None,
        };
        let json = serde_json::to_string(&props).expect("serialize TableProperties");
        assert!(json.contains(r#""KeySchema":[{"AttributeName":"id","KeyType":"HASH"}]"#));
        assert!(!json.contains("TableName"));
        assert!(!json.contains("StreamSpecification"));
    }

    #[test]
    fn test_should_display_key_types_as_schema_literals() {
        assert_eq!(KeyType::Hash.to_string(), "HASH");
        assert_eq!(ScalarAttributeType::Number.as_str(), "N");
        assert_eq!(
            StreamViewType::NewAndOldImages.to_string(),
            "NEW_AND_OLD_IMAGES"
        );
    }
}
