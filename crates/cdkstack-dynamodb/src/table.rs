//! The `Table` construct.

use cdkstack_core::{CdkResult, CfnResource, Construct, Node, Reference};
use cdkstack_dynamodb_model::{
    ATTR_ARN, ATTR_STREAM_ARN, KeyType, ProvisionedThroughput, ScalarAttributeType,
    StreamSpecification, StreamViewType, TABLE_RESOURCE_TYPE, TableProperties,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::error::{TableError, TableResult};
use crate::registry::KeyRegistry;

/// Capacity units provisioned when none are given.
pub const DEFAULT_CAPACITY: i64 = 5;

/// Metadata type recording a user-chosen physical name.
pub const HAS_PHYSICAL_NAME: &str = "aws:cdk:hasPhysicalName";

/// Id of the child node the CloudFormation resource is emitted for.
const RESOURCE_ID: &str = "Resource";

/// A named, typed table attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Scalar type of the attribute.
    #[serde(rename = "type")]
    pub attribute_type: ScalarAttributeType,
}

impl Attribute {
    /// Create an attribute of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }

    /// A string (`S`) attribute.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ScalarAttributeType::String)
    }

    /// A number (`N`) attribute.
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ScalarAttributeType::Number)
    }

    /// A binary (`B`) attribute.
    #[must_use]
    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, ScalarAttributeType::Binary)
    }
}

/// Configuration of a [`Table`].
///
/// # Examples
///
/// ```
/// use cdkstack_dynamodb::{StreamViewType, TableProps};
///
/// let props = TableProps::builder()
///     .table_name("orders")
///     .read_capacity(10)
///     .stream_specification(StreamViewType::NewImage)
///     .build();
/// assert_eq!(props.write_capacity, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    /// Physical table name; CloudFormation generates one when absent.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    /// Provisioned read capacity units.
    #[builder(default = DEFAULT_CAPACITY)]
    #[serde(default = "default_capacity")]
    pub read_capacity: i64,

    /// Provisioned write capacity units.
    #[builder(default = DEFAULT_CAPACITY)]
    #[serde(default = "default_capacity")]
    pub write_capacity: i64,

    /// Enables a stream with the given view type.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamViewType>,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            table_name: None,
            read_capacity: DEFAULT_CAPACITY,
            write_capacity: DEFAULT_CAPACITY,
            stream_specification: None,
        }
    }
}

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

/// A DynamoDB table.
///
/// Keys are added after construction; the table reports a validation error
/// at synthesis time if no partition key was added.
///
/// # Examples
///
/// ```
/// use cdkstack_core::{App, CdkConfig, Construct, Stack};
/// use cdkstack_dynamodb::{Attribute, Table, TableProps};
///
/// let app = App::new(CdkConfig::default());
/// let stack = Stack::new(&app, "Store").unwrap();
/// let mut table = Table::new(&stack, "Orders", TableProps::default()).unwrap();
/// table
///     .add_partition_key(Attribute::string("customer"))
///     .unwrap()
///     .add_sort_key(Attribute::number("placedAt"))
///     .unwrap();
/// assert!(table.validate().is_empty());
/// ```
#[derive(Debug)]
pub struct Table {
    node: Node,
    resource_node: Node,
    logical_id: String,
    props: TableProps,
    registry: KeyRegistry,
}

impl Table {
    /// Create a table below `scope`.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidCapacity`] for non-positive capacity and
    /// [`TableError::Construct`] for an invalid construct id.
    pub fn new(
        scope: &dyn Construct,
        id: impl Into<String>,
        props: TableProps,
    ) -> TableResult<Self> {
        check_capacity("readCapacity", props.read_capacity)?;
        check_capacity("writeCapacity", props.write_capacity)?;

        let mut node = scope.node().child(id)?;
        let resource_node = node.child(RESOURCE_ID)?;
        let logical_id = resource_node.logical_id()?;

        if let Some(name) = &props.table_name {
            node.add_metadata(HAS_PHYSICAL_NAME, serde_json::Value::String(name.clone()));
        }

        debug!(path = %node.path(), logical_id = %logical_id, "created table");
        Ok(Self {
            node,
            resource_node,
            logical_id,
            props,
            registry: KeyRegistry::new(),
        })
    }

    /// Set the partition (`HASH`) key.
    ///
    /// # Errors
    /// Returns [`TableError::DuplicateKeyRole`] if a partition key is already
    /// set and [`TableError::ConflictingAttributeType`] if the attribute was
    /// declared with another type.
    pub fn add_partition_key(&mut self, attribute: Attribute) -> TableResult<&mut Self> {
        self.add_key(&attribute, KeyType::Hash)
    }

    /// Set the sort (`RANGE`) key.
    ///
    /// # Errors
    /// Same as [`Table::add_partition_key`], for the sort key role.
    pub fn add_sort_key(&mut self, attribute: Attribute) -> TableResult<&mut Self> {
        self.add_key(&attribute, KeyType::Range)
    }

    fn add_key(&mut self, attribute: &Attribute, key_type: KeyType) -> TableResult<&mut Self> {
        self.registry
            .set_key(&attribute.name, attribute.attribute_type, key_type)?;
        Ok(self)
    }

    /// The table's configuration.
    #[must_use]
    pub fn props(&self) -> &TableProps {
        &self.props
    }

    /// Declared keys and attributes.
    #[must_use]
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// The table ARN, resolved at deploy time.
    #[must_use]
    pub fn table_arn(&self) -> Reference {
        Reference::get_att(&self.logical_id, ATTR_ARN)
    }

    /// The physical table name, resolved at deploy time.
    #[must_use]
    pub fn table_name(&self) -> Reference {
        Reference::resource(&self.logical_id)
    }

    /// The ARN of the table's stream, resolved at deploy time.
    #[must_use]
    pub fn table_stream_arn(&self) -> Reference {
        Reference::get_att(&self.logical_id, ATTR_STREAM_ARN)
    }

    /// Project the current configuration into CloudFormation properties.
    #[must_use]
    pub fn to_properties(&self) -> TableProperties {
        TableProperties {
            key_schema: self.registry.key_schema().to_vec(),
            attribute_definitions: self.registry.attribute_definitions().to_vec(),
            provisioned_throughput: ProvisionedThroughput {
                read_capacity_units: self.props.read_capacity,
                write_capacity_units: self.props.write_capacity,
            },
            table_name: self.props.table_name.clone(),
            stream_specification: self
                .props
                .stream_specification
                .map(|stream_view_type| StreamSpecification { stream_view_type }),
        }
    }
}

impl Construct for Table {
    fn node(&self) -> &Node {
        &self.node
    }

    fn validate(&self) -> Vec<String> {
        self.registry.validate()
    }
}

impl CfnResource for Table {
    fn resource_node(&self) -> &Node {
        &self.resource_node
    }

    fn resource_type(&self) -> &'static str {
        TABLE_RESOURCE_TYPE
    }

    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn render_properties(&self) -> CdkResult<serde_json::Value> {
        Ok(serde_json::to_value(self.to_properties())?)
    }
}

fn check_capacity(field: &'static str, value: i64) -> TableResult<()> {
    if value <= 0 {
        return Err(TableError::InvalidCapacity { field, value });
    }
    Ok(())
}
