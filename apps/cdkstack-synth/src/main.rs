//! CDKStack Synth - render CloudFormation templates from a stack file.
//!
//! # Usage
//!
//! ```text
//! cdkstack-synth [STACK_FILE] [OUTDIR]
//! ```
//!
//! `STACK_FILE` defaults to `stacks.json`; `OUTDIR` overrides `CDK_OUTDIR`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CDK_OUTDIR` | `cdk.out` | Cloud assembly directory |
//! | `CDK_DEFAULT_ACCOUNT` | `000000000000` | Account recorded in the manifest |
//! | `CDK_DEFAULT_REGION` | `us-east-1` | Region recorded in the manifest |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod definition;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cdkstack_core::CdkConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::definition::StackFile;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = CdkConfig::from_env();
    init_tracing(&config.log_level)?;

    let stack_path = args
        .get(1)
        .map_or_else(|| PathBuf::from("stacks.json"), PathBuf::from);
    if let Some(outdir) = args.get(2) {
        config.outdir = PathBuf::from(outdir);
    }

    info!(file = %stack_path.display(), "reading stack file");
    let json = fs::read_to_string(&stack_path)
        .with_context(|| format!("Failed to read stack file: {}", stack_path.display()))?;

    let app = StackFile::from_json(&json)?.into_app(config)?;
    let assembly = app.synth().context("Synthesis failed")?;

    for artifact in &assembly.stacks {
        info!(
            stack = %artifact.stack_name,
            resources = artifact.template.resources().len(),
            file = %artifact.template_file.display(),
            "synthesized"
        );
    }
    info!(
        outdir = %assembly.directory.display(),
        stacks = assembly.stacks.len(),
        "synthesis complete"
    );

    Ok(())
}
