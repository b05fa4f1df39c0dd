//! Core types, configuration, and synthesis for CDKStack.
//!
//! This crate provides the foundational building blocks shared across all
//! CDKStack construct libraries: the construct tree ([`Node`], [`Construct`]),
//! logical ID derivation, opaque CloudFormation references, and the
//! [`Stack`]/[`App`] synthesis pipeline that turns constructs into templates.

mod app;
mod config;
mod construct;
mod error;
pub mod logical_id;
mod macros;
mod node;
mod reference;
mod stack;
mod types;

pub use app::{App, ArtifactManifest, ArtifactProperties, CloudAssembly, Manifest, StackArtifact};
pub use config::CdkConfig;
pub use construct::{CfnResource, Construct};
pub use error::{CdkError, CdkResult, ValidationMessage};
pub use node::{MetadataEntry, Node};
pub use reference::Reference;
pub use stack::{Output, Stack, Template, TemplateResource};
pub use types::{AccountId, AwsRegion, Environment};
