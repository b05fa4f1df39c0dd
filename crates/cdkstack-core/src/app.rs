//! The construct tree root and cloud assembly output.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CdkConfig;
use crate::construct::Construct;
use crate::error::{CdkError, CdkResult};
use crate::node::{MetadataEntry, Node};
use crate::stack::{Stack, Template};

/// Schema version written to `manifest.json`.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Artifact type of a CloudFormation stack in the manifest.
pub const STACK_ARTIFACT_TYPE: &str = "aws:cloudformation:stack";

/// File name of the cloud assembly manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` describing every artifact in a cloud assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest schema version.
    pub version: String,
    /// Artifacts keyed by stack name.
    pub artifacts: BTreeMap<String, ArtifactManifest>,
}

/// One stack entry in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactManifest {
    /// Always [`STACK_ARTIFACT_TYPE`].
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// `aws://<account>/<region>`.
    pub environment: String,
    /// Where the stack template lives.
    pub properties: ArtifactProperties,
    /// Construct metadata keyed by `/`-prefixed path.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Vec<MetadataEntry>>,
}

/// Stack artifact properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactProperties {
    /// Template file name relative to the assembly directory.
    pub template_file: String,
}

/// A stack written to the cloud assembly.
#[derive(Debug, Clone)]
pub struct StackArtifact {
    /// Stack name.
    pub stack_name: String,
    /// Absolute (or outdir-relative) path of the written template.
    pub template_file: PathBuf,
    /// The synthesized template.
    pub template: Template,
}

/// Result of [`App::synth`].
#[derive(Debug, Clone)]
pub struct CloudAssembly {
    /// Directory the assembly was written to.
    pub directory: PathBuf,
    /// The manifest as written.
    pub manifest: Manifest,
    /// All stacks, in the order they were added.
    pub stacks: Vec<StackArtifact>,
}

impl CloudAssembly {
    /// Look up a stack artifact by name.
    #[must_use]
    pub fn stack(&self, name: &str) -> Option<&StackArtifact> {
        self.stacks.iter().find(|s| s.stack_name == name)
    }
}

/// Root of the construct tree.
#[derive(Debug)]
pub struct App {
    node: Node,
    config: CdkConfig,
    stacks: Vec<Stack>,
}

impl App {
    /// Create an app with explicit configuration.
    #[must_use]
    pub fn new(config: CdkConfig) -> Self {
        Self {
            node: Node::root(),
            config,
            stacks: Vec::new(),
        }
    }

    /// Create an app configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CdkConfig::from_env())
    }

    /// The app configuration.
    #[must_use]
    pub fn config(&self) -> &CdkConfig {
        &self.config
    }

    /// Stacks added so far.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Register a stack created with [`Stack::new`].
    ///
    /// # Errors
    /// Returns [`CdkError::DuplicateConstructId`] if a stack with the same
    /// name was already added.
    pub fn add_stack(&mut self, stack: Stack) -> CdkResult<()> {
        if self.stacks.iter().any(|s| s.name() == stack.name()) {
            return Err(CdkError::DuplicateConstructId {
                id: stack.name().to_owned(),
                scope: "the app".to_owned(),
            });
        }
        self.stacks.push(stack);
        Ok(())
    }

    /// Synthesize every stack and write the cloud assembly.
    ///
    /// All stacks are validated and rendered before anything is written, so a
    /// validation failure leaves the output directory untouched.
    pub fn synth(&self) -> CdkResult<CloudAssembly> {
        let templates = self
            .stacks
            .iter()
            .map(Stack::synth)
            .collect::<CdkResult<Vec<_>>>()?;

        let directory = self.config.outdir.clone();
        fs::create_dir_all(&directory).map_err(|source| CdkError::Io {
            path: directory.clone(),
            source,
        })?;

        let mut artifacts = BTreeMap::new();
        let mut stacks = Vec::with_capacity(self.stacks.len());
        for (stack, template) in self.stacks.iter().zip(templates) {
            let file_name = format!("{}.template.json", stack.name());
            let template_file = directory.join(&file_name);
            write_json(&template_file, &template)?;
            info!(stack = %stack.name(), file = %template_file.display(), "wrote template");

            artifacts.insert(
                stack.name().to_owned(),
                ArtifactManifest {
                    artifact_type: STACK_ARTIFACT_TYPE.to_owned(),
                    environment: stack.environment().to_string(),
                    properties: ArtifactProperties {
                        template_file: file_name,
                    },
                    metadata: stack.metadata(),
                },
            );
            stacks.push(StackArtifact {
                stack_name: stack.name().to_owned(),
                template_file,
                template,
            });
        }

        let manifest = Manifest {
            version: MANIFEST_VERSION.to_owned(),
            artifacts,
        };
        write_json(&directory.join(MANIFEST_FILE), &manifest)?;
        info!(
            outdir = %directory.display(),
            stacks = stacks.len(),
            "cloud assembly written"
        );

        Ok(CloudAssembly {
            directory,
            manifest,
            stacks,
        })
    }
}

impl Construct for App {
    fn node(&self) -> &Node {
        &self.node
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> CdkResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| CdkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
