//! Synthesis configuration.
//!
//! All configuration is driven by environment variables, using the names the
//! CDK toolkit passes to an app (`CDK_OUTDIR`, `CDK_DEFAULT_ACCOUNT`,
//! `CDK_DEFAULT_REGION`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::types::{AccountId, AwsRegion, Environment};

/// Global configuration for an [`App`](crate::App).
///
/// # Examples
///
/// ```
/// use cdkstack_core::CdkConfig;
///
/// let config = CdkConfig::default();
/// assert_eq!(config.outdir.to_str(), Some("cdk.out"));
/// assert_eq!(config.default_region.as_str(), "us-east-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CdkConfig {
    /// Directory the cloud assembly is written to.
    #[builder(default = PathBuf::from("cdk.out"), setter(into))]
    pub outdir: PathBuf,

    /// Account used for stacks without an explicit environment.
    #[builder(default)]
    pub default_account: AccountId,

    /// Region used for stacks without an explicit environment.
    #[builder(default)]
    pub default_region: AwsRegion,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    pub log_level: String,
}

impl Default for CdkConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("cdk.out"),
            default_account: AccountId::default(),
            default_region: AwsRegion::default(),
            log_level: String::from("info"),
        }
    }
}

impl CdkConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CDK_OUTDIR` | `cdk.out` |
    /// | `CDK_DEFAULT_ACCOUNT` | `000000000000` |
    /// | `CDK_DEFAULT_REGION` | `us-east-1` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// An account that is not a 12-digit string is ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CDK_OUTDIR") {
            config.outdir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("CDK_DEFAULT_ACCOUNT") {
            match AccountId::new(v) {
                Ok(account) => config.default_account = account,
                Err(e) => warn!(error = %e, "ignoring CDK_DEFAULT_ACCOUNT"),
            }
        }
        if let Ok(v) = std::env::var("CDK_DEFAULT_REGION") {
            config.default_region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The environment stacks get unless they override it.
    #[must_use]
    pub fn default_environment(&self) -> Environment {
        Environment::new(self.default_account.clone(), self.default_region.clone())
    }
}
