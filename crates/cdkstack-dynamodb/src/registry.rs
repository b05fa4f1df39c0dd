//! Key schema and attribute definition bookkeeping.

use cdkstack_dynamodb_model::{AttributeDefinition, KeySchemaElement, KeyType, ScalarAttributeType};
use tracing::debug;

use crate::error::{TableError, TableResult};

/// Validation message reported when a table has no partition key.
pub const MISSING_PARTITION_KEY: &str = "a partition key must be specified";

/// Declared attributes and the key schema of one table.
///
/// Entries keep declaration order, which is the order they are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRegistry {
    key_schema: Vec<KeySchemaElement>,
    attribute_definitions: Vec<AttributeDefinition>,
}

impl KeyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` has type `attribute_type`.
    ///
    /// Declaring the same pair again is a no-op.
    ///
    /// # Errors
    /// Returns [`TableError::ConflictingAttributeType`] if `name` was already
    /// declared with a different type.
    pub fn declare_attribute(
        &mut self,
        name: &str,
        attribute_type: ScalarAttributeType,
    ) -> TableResult<()> {
        match self
            .attribute_definitions
            .iter()
            .find(|def| def.attribute_name == name)
        {
            Some(existing) if existing.attribute_type != attribute_type => {
                Err(TableError::ConflictingAttributeType {
                    attribute: name.to_owned(),
                    requested: attribute_type,
                    existing: existing.attribute_type,
                })
            }
            Some(_) => Ok(()),
            None => {
                debug!(attribute = name, %attribute_type, "declared attribute");
                self.attribute_definitions.push(AttributeDefinition {
                    attribute_name: name.to_owned(),
                    attribute_type,
                });
                Ok(())
            }
        }
    }

    /// Declare `name` and assign it the `key_type` role.
    ///
    /// # Errors
    /// Returns [`TableError::ConflictingAttributeType`] if the attribute type
    /// conflicts, or [`TableError::DuplicateKeyRole`] if another attribute
    /// already holds `key_type`.
    pub fn set_key(
        &mut self,
        name: &str,
        attribute_type: ScalarAttributeType,
        key_type: KeyType,
    ) -> TableResult<()> {
        self.declare_attribute(name, attribute_type)?;

        if let Some(existing) = self.find_key(key_type) {
            return Err(TableError::DuplicateKeyRole {
                attribute: name.to_owned(),
                key_type,
                existing: existing.attribute_name.clone(),
            });
        }

        debug!(attribute = name, %key_type, "added key");
        self.key_schema.push(KeySchemaElement {
            attribute_name: name.to_owned(),
            key_type,
        });
        Ok(())
    }

    /// Soft validation: reports a missing partition key.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.find_key(KeyType::Hash).is_none() {
            errors.push(MISSING_PARTITION_KEY.to_owned());
        }
        errors
    }

    /// The key schema entry holding `key_type`, if any.
    #[must_use]
    pub fn find_key(&self, key_type: KeyType) -> Option<&KeySchemaElement> {
        self.key_schema.iter().find(|k| k.key_type == key_type)
    }

    /// Key schema in declaration order.
    #[must_use]
    pub fn key_schema(&self) -> &[KeySchemaElement] {
        &self.key_schema
    }

    /// Attribute definitions in declaration order.
    #[must_use]
    pub fn attribute_definitions(&self) -> &[AttributeDefinition] {
        &self.attribute_definitions
    }
}
