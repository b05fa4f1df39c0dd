//! Stacks and template synthesis.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::construct::{CfnResource, Construct};
use crate::error::{CdkError, CdkResult, ValidationMessage};
use crate::logical_id::make_unique_id;
use crate::node::{MetadataEntry, Node};
use crate::types::Environment;

/// A value exported in the template's `Outputs` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    /// The output value, usually a [`Reference`](crate::Reference).
    pub value: serde_json::Value,
    /// Optional description shown in the console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the template's `Resources` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateResource {
    /// CloudFormation resource type.
    #[serde(rename = "Type")]
    pub resource_type: String,
    /// Rendered resource properties.
    #[serde(rename = "Properties")]
    pub properties: serde_json::Value,
}

/// A synthesized CloudFormation template.
///
/// Resources and outputs keep the order in which they were added to the stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    resources: Vec<(String, TemplateResource)>,
    outputs: Vec<(String, Output)>,
}

impl Template {
    /// All resources keyed by logical id.
    #[must_use]
    pub fn resources(&self) -> &[(String, TemplateResource)] {
        &self.resources
    }

    /// Look up a resource by logical id.
    #[must_use]
    pub fn resource(&self, logical_id: &str) -> Option<&TemplateResource> {
        self.resources
            .iter()
            .find_map(|(id, r)| (id == logical_id).then_some(r))
    }

    /// All outputs keyed by logical id.
    #[must_use]
    pub fn outputs(&self) -> &[(String, Output)] {
        &self.outputs
    }

    /// Look up an output by logical id.
    #[must_use]
    pub fn output(&self, logical_id: &str) -> Option<&Output> {
        self.outputs
            .iter()
            .find_map(|(id, o)| (id == logical_id).then_some(o))
    }

    /// Render the template as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CdkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.outputs.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Resources", &Entries(&self.resources))?;
        if !self.outputs.is_empty() {
            map.serialize_entry("Outputs", &Entries(&self.outputs))?;
        }
        map.end()
    }
}

/// Serializes ordered pairs as a JSON object without re-sorting keys.
struct Entries<'a, T>(&'a [(String, T)]);

impl<T: Serialize> Serialize for Entries<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// The unit of deployment: a set of resources rendered into one template.
#[derive(Debug)]
pub struct Stack {
    node: Node,
    environment: Environment,
    resources: Vec<Box<dyn CfnResource>>,
    outputs: Vec<(String, Output)>,
    output_nodes: Vec<Node>,
}

impl Stack {
    /// Create a stack below `app`, targeting the app's default environment.
    ///
    /// The stack is not part of the app until passed to [`App::add_stack`].
    ///
    /// # Errors
    /// Returns an error if `name` is not a valid CloudFormation stack name.
    pub fn new(app: &App, name: impl Into<String>) -> CdkResult<Self> {
        let name = name.into();
        validate_stack_name(&name)?;
        Ok(Self {
            node: app.node().child(name)?.into_stack_root(),
            environment: app.config().default_environment(),
            resources: Vec::new(),
            outputs: Vec::new(),
            output_nodes: Vec::new(),
        })
    }

    /// Override the target environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// The stack name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.node.id()
    }

    /// The target environment.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Register a resource construct created under this stack.
    ///
    /// # Errors
    /// Returns [`CdkError::ScopeMismatch`] if the construct was created in
    /// another stack, and [`CdkError::DuplicateConstructId`] if its path or
    /// logical id is already taken.
    pub fn add_resource<R: CfnResource + 'static>(&mut self, resource: R) -> CdkResult<()> {
        let node = resource.node();
        if node.stack_path() != self.node.path() {
            return Err(CdkError::ScopeMismatch {
                path: node.path(),
                stack: self.name().to_owned(),
            });
        }
        self.ensure_unique(node, resource.logical_id())?;

        debug!(
            stack = %self.name(),
            path = %node.path(),
            logical_id = %resource.logical_id(),
            resource_type = resource.resource_type(),
            "registered resource"
        );
        self.resources.push(Box::new(resource));
        Ok(())
    }

    /// Add an entry to the template's `Outputs` section.
    ///
    /// # Errors
    /// Returns an error if `id` is invalid or already used in this stack.
    pub fn add_output(
        &mut self,
        id: impl Into<String>,
        value: impl Into<serde_json::Value>,
        description: Option<String>,
    ) -> CdkResult<()> {
        let node = self.node.child(id)?;
        let logical_id = make_unique_id(node.stack_components())?;
        self.ensure_unique(&node, &logical_id)?;

        self.outputs.push((
            logical_id,
            Output {
                value: value.into(),
                description,
            },
        ));
        self.output_nodes.push(node);
        Ok(())
    }

    fn ensure_unique(&self, node: &Node, logical_id: &str) -> CdkResult<()> {
        let path = node.path();
        let taken = self
            .resources
            .iter()
            .any(|r| r.node().path() == path || r.logical_id() == logical_id)
            || self.output_nodes.iter().any(|n| n.path() == path)
            || self.outputs.iter().any(|(id, _)| id == logical_id);
        if taken {
            return Err(CdkError::DuplicateConstructId {
                id: node.id().to_owned(),
                scope: node.parent_path(),
            });
        }
        Ok(())
    }

    /// Run `validate()` on every registered construct.
    #[must_use]
    pub fn validate_all(&self) -> Vec<ValidationMessage> {
        self.resources
            .iter()
            .flat_map(|r| {
                let path = r.node().path();
                r.validate().into_iter().map(move |message| ValidationMessage {
                    path: path.clone(),
                    message,
                })
            })
            .collect()
    }

    /// Validate and render the stack into a template.
    ///
    /// # Errors
    /// Returns [`CdkError::Validation`] with every message reported by every
    /// construct if any construct is invalid.
    pub fn synth(&self) -> CdkResult<Template> {
        let errors = self.validate_all();
        if !errors.is_empty() {
            warn!(stack = %self.name(), errors = errors.len(), "stack failed validation");
            return Err(CdkError::Validation(errors));
        }

        let mut resources = Vec::with_capacity(self.resources.len());
        for resource in &self.resources {
            resources.push((
                resource.logical_id().to_owned(),
                TemplateResource {
                    resource_type: resource.resource_type().to_owned(),
                    properties: resource.render_properties()?,
                },
            ));
        }

        info!(
            stack = %self.name(),
            resources = resources.len(),
            outputs = self.outputs.len(),
            "synthesized stack"
        );
        Ok(Template {
            resources,
            outputs: self.outputs.clone(),
        })
    }

    /// Construct metadata keyed by `/`-prefixed construct path.
    ///
    /// Every resource contributes an `aws:cdk:logicalId` entry on its
    /// resource node, after any metadata recorded on the construct itself.
    #[must_use]
    pub fn metadata(&self) -> BTreeMap<String, Vec<MetadataEntry>> {
        let mut out: BTreeMap<String, Vec<MetadataEntry>> = BTreeMap::new();
        for resource in &self.resources {
            let node = resource.node();
            if !node.metadata().is_empty() {
                out.entry(format!("/{}", node.path()))
                    .or_default()
                    .extend_from_slice(node.metadata());
            }
            out.entry(format!("/{}", resource.resource_node().path()))
                .or_default()
                .push(MetadataEntry {
                    entry_type: "aws:cdk:logicalId".to_owned(),
                    data: serde_json::Value::String(resource.logical_id().to_owned()),
                });
        }
        out
    }
}

impl Construct for Stack {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Validate a CloudFormation stack name: `[A-Za-z][A-Za-z0-9-]*`, at most 128 chars.
fn validate_stack_name(name: &str) -> CdkResult<()> {
    let valid = name.len() <= 128
        && name.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
    if !valid {
        return Err(CdkError::InvalidStackName(name.to_owned()));
    }
    Ok(())
}
