//! End-to-end tests for CDKStack synthesis.
//!
//! Each test builds an app, synthesizes it into a temporary cloud assembly
//! directory and inspects the JSON that was written.
//!
//! Run them with:
//! ```text
//! cargo test -p cdkstack-integration
//! ```

use std::path::Path;
use std::sync::Once;

use cdkstack_core::{App, CdkConfig};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create an app writing its assembly below `outdir`.
#[must_use]
pub fn test_app(outdir: &Path) -> App {
    init_tracing();
    App::new(CdkConfig::builder().outdir(outdir).build())
}

/// Read and parse a JSON file written by synthesis.
pub fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

mod test_assembly;
mod test_table;
