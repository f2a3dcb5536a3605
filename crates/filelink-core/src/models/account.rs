//! Account identifier and persisted storage settings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Query parameter carrying the account identifier on the settings page URL.
const ACCOUNT_ID_QUERY_PARAM: &str = "accountId";

/// Opaque identifier of a mail account, used as the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(Error::InvalidInput(
                "Account identifier cannot be empty".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Extract the account identifier from a settings page URL
    /// (e.g. `moz-extension://…/management.html?accountId=account1`).
    pub fn from_page_url(page_url: &str) -> Result<Self> {
        let url = Url::parse(page_url.trim())
            .map_err(|error| Error::InvalidInput(format!("Invalid page URL: {error}")))?;

        let value = url
            .query_pairs()
            .find(|(key, _)| key == ACCOUNT_ID_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Page URL has no '{ACCOUNT_ID_QUERY_PARAM}' query parameter"
                ))
            })?;

        Self::new(value)
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// S3-compatible storage settings persisted for one account.
///
/// At rest, `endpoint` carries no `http://`/`https://` prefix and a non-empty
/// `prefix` ends with `/`. Records are always written whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStorageConfig {
    /// Hostname of the S3-compatible service
    pub endpoint: String,
    /// Free-form region identifier
    pub region: String,
    /// Bucket name
    pub bucket: String,
    /// Object key prefix
    pub prefix: String,
    /// Access key id
    pub access_key: String,
    /// Secret access key
    pub secret_key: String,
}

/// Account state reported to the mail client host after a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// Whether the account has usable storage settings
    pub configured: bool,
}

impl AccountUpdate {
    /// Update marking the account as configured.
    #[must_use]
    pub const fn configured() -> Self {
        Self { configured: true }
    }
}
