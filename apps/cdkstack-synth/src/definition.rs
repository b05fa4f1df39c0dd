//! Declarative stack files.
//!
//! A stack file lists stacks and the tables in each one:
//!
//! ```json
//! {
//!   "stacks": [{
//!     "name": "Store",
//!     "tables": [{
//!       "id": "Orders",
//!       "tableName": "orders",
//!       "streamSpecification": "NEW_IMAGE",
//!       "partitionKey": { "name": "customer", "type": "S" },
//!       "sortKey": { "name": "placedAt", "type": "N" },
//!       "export": true
//!     }]
//!   }]
//! }
//! ```

use anyhow::{Context, Result};
use cdkstack_core::{App, CdkConfig, Stack};
use cdkstack_dynamodb::{Attribute, StreamViewType, Table, TableProps};
use serde::Deserialize;
use tracing::debug;

/// Top-level stack file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackFile {
    pub stacks: Vec<StackDefinition>,
}

/// One stack and its tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackDefinition {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

/// One table: construct id, props and keys.
///
/// Props are spelled out here rather than flattened from [`TableProps`] so
/// that a misspelled key is rejected instead of silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableDefinition {
    pub id: String,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub read_capacity: Option<i64>,
    #[serde(default)]
    pub write_capacity: Option<i64>,
    #[serde(default)]
    pub stream_specification: Option<StreamViewType>,
    #[serde(default)]
    pub partition_key: Option<Attribute>,
    #[serde(default)]
    pub sort_key: Option<Attribute>,
    /// Add `<id>Arn` (and `<id>StreamArn` for streamed tables) outputs.
    #[serde(default)]
    pub export: bool,
}

impl TableDefinition {
    /// Table props, with unset capacities left at their defaults.
    pub fn props(&self) -> TableProps {
        let defaults = TableProps::default();
        TableProps {
            table_name: self.table_name.clone(),
            read_capacity: self.read_capacity.unwrap_or(defaults.read_capacity),
            write_capacity: self.write_capacity.unwrap_or(defaults.write_capacity),
            stream_specification: self.stream_specification,
        }
    }
}

impl StackFile {
    /// Parse a stack file from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse stack file")
    }

    /// Build an app holding every stack in the file.
    ///
    /// Tables without a partition key are still added; synthesis reports
    /// them.
    pub fn into_app(self, config: CdkConfig) -> Result<App> {
        let mut app = App::new(config);
        for definition in self.stacks {
            let stack = build_stack(&app, definition)?;
            app.add_stack(stack)?;
        }
        Ok(app)
    }
}

fn build_stack(app: &App, definition: StackDefinition) -> Result<Stack> {
    let mut stack = Stack::new(app, &definition.name)
        .with_context(|| format!("Invalid stack '{}'", definition.name))?;

    for table_def in definition.tables {
        let context = || format!("Invalid table '{}/{}'", definition.name, table_def.id);
        let streamed = table_def.stream_specification.is_some();

        let mut table = Table::new(&stack, &table_def.id, table_def.props())
            .with_context(context)?;
        if let Some(pk) = table_def.partition_key.clone() {
            table.add_partition_key(pk).with_context(context)?;
        }
        if let Some(sk) = table_def.sort_key.clone() {
            table.add_sort_key(sk).with_context(context)?;
        }

        let arn = table.table_arn();
        let stream_arn = table.table_stream_arn();
        stack.add_resource(table).with_context(context)?;

        if table_def.export {
            stack.add_output(format!("{}Arn", table_def.id), arn, None)?;
            if streamed {
                stack.add_output(format!("{}StreamArn", table_def.id), stream_arn, None)?;
            }
        }
        debug!(stack = %definition.name, table = %table_def.id, "added table");
    }

    Ok(stack)
}
