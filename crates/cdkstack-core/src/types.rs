//! The account and region a stack deploys into.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CdkError, CdkResult};

/// Twelve-digit AWS account number.
///
/// Deserialization goes through [`AccountId::new`], so a parsed config can
/// never carry a malformed account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Account recorded when none is configured.
    pub const DEFAULT: &str = "000000000000";

    /// Parse an account number.
    ///
    /// # Errors
    /// Returns [`CdkError::InvalidAccountId`] unless `id` is exactly twelve
    /// ASCII digits.
    pub fn new(id: impl Into<String>) -> CdkResult<Self> {
        let id = id.into();
        if !is_account_number(&id) {
            return Err(CdkError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// The account number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_account_number(id: &str) -> bool {
    id.len() == 12 && id.bytes().all(|b| b.is_ascii_digit())
}

impl Default for AccountId {
    fn default() -> Self {
        Self(String::from(Self::DEFAULT))
    }
}

impl TryFrom<String> for AccountId {
    type Error = CdkError;

    fn try_from(id: String) -> CdkResult<Self> {
        Self::new(id)
    }
}

impl From<AccountId> for String {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region name such as `eu-west-1`. Not checked against the region list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region recorded when none is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Wrap a region name.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// The region name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(String::from(Self::DEFAULT))
    }
}

impl AsRef<str> for AwsRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment target of a stack, written to the manifest as
/// `aws://<account>/<region>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    /// Target account.
    pub account: AccountId,
    /// Target region.
    pub region: AwsRegion,
}

impl Environment {
    /// Pair an account with a region.
    #[must_use]
    pub fn new(account: AccountId, region: AwsRegion) -> Self {
        Self { account, region }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aws://{}/{}", self.account, self.region)
    }
}
