//! Construct tree nodes.
//!
//! A [`Node`] is a value describing where a construct sits in the tree: its
//! id, the ids of all its ancestors, the stack it belongs to, and the
//! metadata attached to it. Parents do not hold pointers to children; scopes
//! hand out child nodes and the owning [`Stack`](crate::Stack) registers the
//! finished constructs.

use serde::{Deserialize, Serialize};

use crate::error::{CdkError, CdkResult};
use crate::logical_id::make_unique_id;

/// Separator between path components.
pub const PATH_SEP: &str = "/";

/// A metadata entry attached to a construct, emitted into the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Entry type, e.g. `aws:cdk:logicalId`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Arbitrary JSON payload.
    pub data: serde_json::Value,
}

/// Position of a construct within the construct tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    /// Ids from the top-level construct below the app down to this node.
    path: Vec<String>,
    /// Number of leading `path` components naming the owning stack.
    stack_depth: usize,
    metadata: Vec<MetadataEntry>,
}

impl Node {
    /// The root node owned by an [`App`](crate::App).
    #[must_use]
    pub fn root() -> Self {
        Self {
            id: String::new(),
            path: Vec::new(),
            stack_depth: 0,
            metadata: Vec::new(),
        }
    }

    /// Create a child node below this one.
    ///
    /// # Errors
    /// Returns [`CdkError::InvalidConstructId`] if `id` is empty or contains `/`.
    pub fn child(&self, id: impl Into<String>) -> CdkResult<Self> {
        let id = id.into();
        if id.is_empty() || id.contains(PATH_SEP) {
            return Err(CdkError::InvalidConstructId(id));
        }
        let mut path = self.path.clone();
        path.push(id.clone());
        Ok(Self {
            id,
            path,
            stack_depth: self.stack_depth,
            metadata: Vec::new(),
        })
    }

    /// Mark this node as a stack boundary: descendants compute their logical
    /// ids relative to it.
    #[must_use]
    pub(crate) fn into_stack_root(mut self) -> Self {
        self.stack_depth = self.path.len();
        self
    }

    /// The construct id (last path component).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path components from the app root.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.path
    }

    /// Path components below the owning stack.
    #[must_use]
    pub fn stack_components(&self) -> &[String] {
        &self.path[self.stack_depth..]
    }

    /// Path of the owning stack, empty if the node is not inside one.
    #[must_use]
    pub fn stack_path(&self) -> String {
        self.path[..self.stack_depth].join(PATH_SEP)
    }

    /// Path of the enclosing scope.
    #[must_use]
    pub fn parent_path(&self) -> String {
        self.path[..self.path.len().saturating_sub(1)].join(PATH_SEP)
    }

    /// Full path, e.g. `MyStack/Users/Resource`.
    #[must_use]
    pub fn path(&self) -> String {
        self.path.join(PATH_SEP)
    }

    /// Whether this node is the root of the tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Template-unique logical id derived from the stack-relative path.
    ///
    /// # Errors
    /// Returns [`CdkError::EmptyLogicalId`] for the stack node itself.
    pub fn logical_id(&self) -> CdkResult<String> {
        make_unique_id(self.stack_components())
    }

    /// Attach a metadata entry.
    pub fn add_metadata(&mut self, entry_type: impl Into<String>, data: serde_json::Value) {
        self.metadata.push(MetadataEntry {
            entry_type: entry_type.into(),
            data,
        });
    }

    /// Metadata attached to this node, in insertion order.
    #[must_use]
    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }
}
